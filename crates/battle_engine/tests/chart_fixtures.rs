//! Data-driven matchup chart tests.
//!
//! Uses `libtest-mimic` to generate one test per fixture case, allowing
//! filtering with `cargo test --test chart_fixtures water` etc. The
//! fixture pins every listed chart entry plus the Normal override and
//! unlisted-pair defaults.

use std::fs::File;
use std::io::BufReader;

use battle_engine::{Kind, STANDARD_CHART};
use libtest_mimic::{Arguments, Failed, Trial};
use serde::Deserialize;

#[derive(Deserialize)]
struct EffectivenessFixture {
    cases: Vec<EffectivenessCase>,
}

#[derive(Deserialize, Clone)]
struct EffectivenessCase {
    id: String,
    attack: String,
    defense: String,
    expected: f64,
}

fn run_case(case: &EffectivenessCase) -> Result<(), Failed> {
    let attack = Kind::from_str(&case.attack)
        .ok_or_else(|| format!("unknown attack kind '{}'", case.attack))?;
    let defense = Kind::from_str(&case.defense)
        .ok_or_else(|| format!("unknown defense kind '{}'", case.defense))?;

    let actual = STANDARD_CHART.effectiveness(attack, defense).multiplier();
    if actual != case.expected {
        return Err(format!(
            "{} vs {}: got {}, expected {}",
            case.attack, case.defense, actual, case.expected
        )
        .into());
    }
    Ok(())
}

fn main() {
    let args = Arguments::from_args();

    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/effectiveness.json"
    );
    let file = File::open(path).expect("open effectiveness.json");
    let fixture: EffectivenessFixture =
        serde_json::from_reader(BufReader::new(file)).expect("parse effectiveness.json");

    let trials: Vec<Trial> = fixture
        .cases
        .into_iter()
        .map(|case| Trial::test(case.id.clone(), move || run_case(&case)))
        .collect();

    libtest_mimic::run(&args, trials).exit();
}
