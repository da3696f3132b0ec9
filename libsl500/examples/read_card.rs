#![cfg(feature = "serial")]

//! Read block 0 of a Mifare Classic card with the factory transport key.
//!
//! Usage:
//!   cargo run -p libsl500 --example read_card --features serial -- /dev/ttyUSB0 [baud]
//!
//! Set `RUST_LOG=debug` to see every frame on the line.

use anyhow::{Context, bail};
use libsl500::{AntennaState, AuthMode, BaudRate, Connection, Key, LedColor, RequestMode};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(port) = args.next() else {
        bail!("usage: read_card <port> [baud]");
    };
    let baud = match args.next() {
        Some(b) => {
            let bps: u32 = b.parse().context("baud rate must be a number")?;
            BaudRate::from_bits_per_second(bps)
                .with_context(|| format!("unsupported baud rate {}", bps))?
        }
        None => BaudRate::default(),
    };

    let conn = Connection::open_serial(&port, baud)
        .with_context(|| format!("opening {}", port))?;
    println!("reader: {}", conn.model()?);

    conn.set_antenna(AntennaState::On)?;
    conn.light(LedColor::Yellow)?;

    let card = conn
        .detect_card(RequestMode::All)
        .context("no card answered")?;
    println!(
        "card {} (atqa {:#06x}, sak {:#04x})",
        card.uid().to_hex(),
        card.atqa().as_u16(),
        card.sak()
    );

    card.authenticate(&conn, AuthMode::KeyA, 0, Key::DEFAULT)?;
    let block = card.read_block(&conn, 0)?;
    println!("block 0: {}", block.to_hex());

    conn.light(LedColor::Green)?;
    conn.close()?;
    Ok(())
}
