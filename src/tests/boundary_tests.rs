#[cfg(test)]
mod tests {
    use crate::tests::test_utils::ManualTicks;
    use crate::*;

    #[test]
    fn test_invalid_generator_id() {
        for generator_id in [-1i64, 1024, 4096, i64::MIN, i64::MAX] {
            match IdGenerator::new(generator_id) {
                Err(EzIdError::GeneratorIdOutOfRange { generator_id: got, max }) => {
                    assert_eq!(got, generator_id);
                    assert_eq!(max, 1023);
                }
                other => panic!("Expected GeneratorIdOutOfRange for {generator_id}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_generator_id_boundaries() {
        let gen0 = IdGenerator::new(0).unwrap();
        let id0 = gen0.next_id().unwrap();
        assert_eq!(gen0.extract.generator_id(id0), 0);

        let gen1023 = IdGenerator::new(1023).unwrap();
        let id1023 = gen1023.next_id().unwrap();
        assert_eq!(gen1023.extract.generator_id(id1023), 1023);
        assert_eq!(gen1023.generator_id(), MAX_GENERATOR_ID);
    }

    #[test]
    fn test_bit_layout() {
        let g = IdGenerator::new(123).unwrap();
        let id = g.next_id().unwrap();

        assert!(id > 0, "Top bit must be clear");
        assert_eq!((id as u64) >> 63, 0);
        assert_eq!(id & 0xFFF, 1, "First id carries sequence 1");
        assert_eq!((id >> 12) & 0x3FF, 123);
        assert_eq!(g.extract.timestamp(id), (id >> 22) as u64);
    }

    #[test]
    fn test_bit_layout_with_fixed_tick() {
        let g = IdGenerator::with_ticks(0b1010101010, ManualTicks::new(0x1_2345_6789)).unwrap();
        let id = g.next_id().unwrap();

        assert_eq!(id, (0x1_2345_6789i64 << 22) | (0b1010101010 << 12) | 1);
    }

    #[test]
    fn test_max_tick_fits() {
        let g =
            IdGenerator::with_ticks(MAX_GENERATOR_ID as i64, ManualTicks::new(MAX_TICK)).unwrap();
        let id = g.next_id().unwrap();

        assert!(id > 0);
        assert_eq!(g.extract.decompose(id), (MAX_TICK, MAX_GENERATOR_ID, 1));
    }

    #[test]
    fn test_zero_tick() {
        let g = IdGenerator::with_ticks(0, ManualTicks::new(0)).unwrap();
        assert_eq!(g.next_id().unwrap(), 1);
        assert_eq!(g.next_id().unwrap(), 2);
    }
}
