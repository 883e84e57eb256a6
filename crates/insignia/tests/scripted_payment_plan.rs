use std::collections::VecDeque;

use insignia::generator::{payment_plan_structures, RandomSource, Sampler};

/// Integer draws come from a fixed script; every other draw is zero.
struct ScriptedSource {
    integers: VecDeque<i64>,
}

impl ScriptedSource {
    fn new(integers: &[i64]) -> Self {
        Self {
            integers: integers.iter().copied().collect(),
        }
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        0.0
    }

    fn int_between(&mut self, min: i64, _max: i64) -> i64 {
        self.integers.pop_front().unwrap_or(min)
    }
}

#[test]
fn final_installment_takes_the_remainder() {
    let mut sampler = Sampler::new(ScriptedSource::new(&[4, 25, 25, 25]));
    let plans = payment_plan_structures(&mut sampler, 1);

    let percentages: Vec<u32> = plans[0]
        .installments
        .iter()
        .map(|installment| installment.percentage)
        .collect();
    assert_eq!(percentages, vec![25, 25, 25, 25]);
    assert!(plans[0].installments[0].due_date.is_none());
    assert!(plans[0].plan_name.ends_with("Var 1"));
}
