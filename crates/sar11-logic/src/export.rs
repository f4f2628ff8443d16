//! CSV export of simulation output.

use crate::simulation::SimulationResult;

pub const CSV_HEADER: &str = "time,population";

/// Two columns, `time` and `population`, header included.
pub fn to_csv(result: &SimulationResult) -> String {
    let mut csv = String::with_capacity(16 + result.len() * 12);
    csv.push_str(CSV_HEADER);
    csv.push('\n');
    for step in &result.steps {
        csv.push_str(&format!("{},{}\n", step.time, step.population));
    }
    csv
}

/// CSV of an arbitrary `(time, value)` curve, such as the decay demo.
pub fn curve_to_csv(points: &[(f64, f64)]) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');
    for (t, value) in points {
        csv.push_str(&format!("{},{}\n", t, value));
    }
    csv
}
