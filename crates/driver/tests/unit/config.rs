//! Configuration Tests.
//!
//! Verifies the documented defaults and that JSON overrides replace only
//! the fields they name.

use fpm_core::config::{Config, PollPolicy};
use std::path::Path;

#[test]
fn defaults_describe_the_stock_board_setup() {
    let config = Config::default();

    assert_eq!(config.overlay.bitstream, Path::new("system.bit"));
    assert_eq!(config.overlay.config_device, Path::new("/dev/xdevcfg"));
    assert_eq!(config.overlay.mem_device, Path::new("/dev/mem"));
    assert_eq!(config.overlay.register_base, 0x4000_0000);
    assert_eq!(config.overlay.map_len, 0x1000);

    assert_eq!(
        config.handshake.poll,
        PollPolicy::Bounded {
            max_polls: 10_000_000
        }
    );
}

#[test]
fn json_overrides_only_named_fields() {
    let config = Config::from_json(
        r#"{
            "overlay": { "bitstream": "multiplier.bit", "register_base": 1136656384 },
            "handshake": { "poll": { "mode": "bounded", "max_polls": 64 } }
        }"#,
    )
    .unwrap();

    assert_eq!(config.overlay.bitstream, Path::new("multiplier.bit"));
    assert_eq!(config.overlay.register_base, 0x43C0_0000);
    // Unnamed fields keep their defaults.
    assert_eq!(config.overlay.mem_device, Path::new("/dev/mem"));
    assert_eq!(
        config.handshake.poll,
        PollPolicy::Bounded { max_polls: 64 }
    );
}

#[test]
fn unbounded_polling_is_selectable() {
    let config =
        Config::from_json(r#"{ "handshake": { "poll": { "mode": "unbounded" } } }"#).unwrap();
    assert_eq!(config.handshake.poll, PollPolicy::Unbounded);
}

#[test]
fn malformed_json_is_rejected() {
    assert!(Config::from_json("{ not json").is_err());
    assert!(Config::from_json(r#"{ "overlay": { "map_len": "big" } }"#).is_err());
}
