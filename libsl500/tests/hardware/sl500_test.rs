#![cfg(feature = "serial")]

#[path = "common.rs"]
mod common;

use libsl500::{AntennaState, LedColor, RequestMode, Result};
use serial_test::serial;

// These tests require a reader on the port named by SL500_PORT. They are
// marked `#[ignore]` so CI does not attempt to run them. Run manually with:
//
// SL500_PORT=/dev/ttyUSB0 cargo test -p libsl500 --test hardware --features serial -- --ignored

#[test]
#[ignore]
#[serial]
fn query_model_and_device_id() -> Result<()> {
    let Some(conn) = common::open_reader()? else {
        return Ok(());
    };
    let model = conn.model()?;
    assert!(!model.is_empty());
    conn.device_id()?;
    conn.close()
}

#[test]
#[ignore]
#[serial]
fn beep_and_light() -> Result<()> {
    let Some(conn) = common::open_reader()? else {
        return Ok(());
    };
    conn.light(LedColor::Green)?;
    conn.beep(10)?;
    conn.light(LedColor::Off)?;
    conn.close()
}

#[test]
#[ignore]
#[serial]
fn detect_card_if_present() -> Result<()> {
    let Some(conn) = common::open_reader()? else {
        return Ok(());
    };
    conn.set_antenna(AntennaState::On)?;
    match conn.detect_card(RequestMode::All) {
        Ok(card) => println!("card {}", card.uid().to_hex()),
        Err(libsl500::Error::DeviceStatus { status }) => {
            println!("no card in field (status {:#04x})", status)
        }
        Err(e) => return Err(e),
    }
    conn.close()
}
