//! Configuration tests

#[cfg(test)]
mod tests {
    use crate::config::{EzIdConfig, EzIdConfigError};
    use crate::*;

    #[test]
    fn test_default_config() {
        let config = EzIdConfig::default();
        assert!(config.spin_enabled());
        assert_eq!(config.spin_loops(), 64);
        assert_eq!(config.spin_yield_every(), 16);
        assert_eq!(config.max_backoff_ms(), 100);
        assert_eq!(EzIdConfig::builder().build(), config);
    }

    #[test]
    fn test_layout_constants() {
        assert_eq!(TIMESTAMP_BITS + GENERATOR_ID_BITS + SEQUENCE_BITS, 63);
        assert_eq!(MAX_GENERATOR_ID, 0x3FF);
        assert_eq!(MAX_SEQUENCE, 0xFFF);
        assert_eq!(MAX_TICK, (1u64 << 41) - 1);
        assert_eq!(GENERATOR_ID_SHIFT, 12);
        assert_eq!(TIMESTAMP_SHIFT, 22);
    }

    #[test]
    fn test_max_backoff_ok() {
        let cfg = EzIdConfig::builder().max_backoff_ms(5).unwrap().build();
        assert_eq!(cfg.max_backoff_ms(), 5);
    }

    #[test]
    fn test_max_backoff_err() {
        let err = EzIdConfig::builder().max_backoff_ms(0).unwrap_err();
        assert_eq!(err, EzIdConfigError::InvalidMaxBackoff { ms: 0 });
        assert_eq!(err.to_string(), "Max backoff 0ms must be at least 1ms");
    }

    #[test]
    fn test_spin_tuning_builder() {
        let cfg = EzIdConfig::builder()
            .enable_spin(false)
            .spin_loops(0)
            .spin_yield_every(0)
            .build();
        assert!(!cfg.spin_enabled());
        assert_eq!(cfg.spin_loops(), 0);
        assert_eq!(cfg.spin_yield_every(), 0);

        let cfg2 = EzIdConfig::builder()
            .enable_spin(true)
            .spin_loops(128)
            .spin_yield_every(8)
            .build();
        assert!(cfg2.spin_enabled());
        assert_eq!(cfg2.spin_loops(), 128);
        assert_eq!(cfg2.spin_yield_every(), 8);
    }

    #[test]
    fn test_generator_keeps_config() {
        let cfg = EzIdConfig::builder().spin_loops(3).build();
        let g = IdGenerator::with_config(4, cfg).unwrap();
        assert_eq!(*g.config(), cfg);
        assert_eq!(g.generator_id(), 4);
    }
}
