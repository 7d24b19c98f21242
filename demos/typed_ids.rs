use ezid::{EzId, EzIdGenerator, Identifier};

ezid::ez_id_type! {
    /// Identifier of an order
    pub struct OrderId;
}

ezid::ez_id_type! {
    /// Identifier of a product
    pub struct ProductId;
}

#[derive(Debug)]
struct Order {
    id: OrderId,
    product: ProductId,
    customer_name: String,
    total_price: u32,
}

fn main() {
    let orders: EzIdGenerator<OrderId> = EzIdGenerator::new(1).unwrap();
    let products: EzIdGenerator<ProductId> = EzIdGenerator::new(2).unwrap();

    let order = Order {
        id: orders.next_id().unwrap(),
        product: products.next_id().unwrap(),
        customer_name: "John Doe".to_string(),
        total_price: 100,
    };

    println!("Created order {} for product {}", order.id, order.product);
    println!("{order:#?}");

    // Route parameters arrive as text
    let from_route: OrderId = order.id.as_str().parse().unwrap();
    assert_eq!(from_route, order.id);

    // Same value, different variants: same text
    let as_product = ProductId::new(order.id.value());
    assert_eq!(as_product.to_string(), order.id.to_string());

    // Generic code works on any variant
    println!("Generator of order: {}", generator_of(&order.id));
    println!("Generator of product: {}", generator_of(&order.product));
    println!("Customer {} paid {}", order.customer_name, order.total_price);
}

fn generator_of<I: Identifier>(id: &I) -> u16 {
    let ez: &EzId = id.ez_id();
    ez.generator_id()
}
