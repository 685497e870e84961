use std::io::Cursor;

use labbot::interface::{ActionWriter, TurnReader};
use labbot::kernel::reactor::{Reactor, ReactorConfig};
use labbot::kernel::scheduler::SideEffect;

const OPPONENT: &str = "START_POS 0 0 0 0 0 0 0 0 0 0 0 0";
const AVAILABLE: &str = "5 5 5 5 5";

fn me(location: &str, storage: &str) -> String {
    format!("{} 0 0 {} 0 0 0 0 0", location, storage)
}

fn turn_text(location: &str, storage: &str, samples: &[&str]) -> String {
    let mut text = format!("{}\n{}\n{}\n{}\n", me(location, storage), OPPONENT, AVAILABLE, samples.len());
    for s in samples {
        text.push_str(s);
        text.push('\n');
    }
    text
}

/// Runs the driver loop against in-memory stdin/stdout.
fn play(input: String) -> (String, anyhow::Result<()>) {
    let mut reader = TurnReader::new(Cursor::new(input));
    let mut writer = ActionWriter::new(Vec::new());
    let mut reactor = Reactor::new(ReactorConfig::default());

    let result = (|| -> anyhow::Result<()> {
        reader.read_preamble()?;
        while let Some(turn) = reader.read_turn()? {
            for effect in reactor.tick_step(turn)? {
                if let SideEffect::Emit(action) = effect {
                    writer.emit(&action)?;
                }
            }
        }
        Ok(())
    })();

    (String::from_utf8(writer.into_inner()).unwrap(), result)
}

#[test]
fn plays_a_full_sample_cycle() {
    let pooled = "0 -1 1 A 10 1 0 0 0 0";
    let carried = "0 0 1 A 10 1 0 0 0 0";

    let mut input = String::from("1\n0 0 3 3 3\n");
    input.push_str(&turn_text("START_POS", "0 0 0 0 0", &[pooled]));
    input.push_str(&turn_text("DIAGNOSIS", "0 0 0 0 0", &[pooled]));
    input.push_str(&turn_text("DIAGNOSIS", "0 0 0 0 0", &[carried]));
    input.push_str(&turn_text("MOLECULES", "0 0 0 0 0", &[carried]));
    input.push_str(&turn_text("MOLECULES", "1 0 0 0 0", &[carried]));
    input.push_str(&turn_text("LABORATORY", "1 0 0 0 0", &[carried]));
    input.push_str(&turn_text("LABORATORY", "0 0 0 0 0", &[]));

    let (output, result) = play(input);
    assert!(result.is_ok());
    assert_eq!(
        output.lines().collect::<Vec<_>>(),
        vec![
            "GOTO DIAGNOSIS",
            "CONNECT 0",
            "GOTO MOLECULES",
            "CONNECT A",
            "GOTO LABORATORY",
            "CONNECT 0",
            "GOTO DIAGNOSIS",
        ]
    );
}

#[test]
fn malformed_turn_stops_without_output() {
    let mut input = String::from("0\n");
    input.push_str(&turn_text("START_POS", "0 0 0 0 0", &[]));
    input.push_str(&turn_text("ENGINE_ROOM", "0 0 0 0 0", &[]));
    input.push_str(&turn_text("START_POS", "0 0 0 0 0", &[]));

    let (output, result) = play(input);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("ENGINE_ROOM"));
    assert_eq!(output, "GOTO LABORATORY\n");
}

#[test]
fn truncated_input_is_a_framing_error() {
    let mut input = String::from("0\n");
    input.push_str(&me("START_POS", "0 0 0 0 0"));
    input.push('\n');

    let (output, result) = play(input);
    assert!(result.is_err());
    assert!(output.is_empty());
}
