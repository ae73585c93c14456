use crate::engines::population::Robot;
use crate::types::InheritedWeightMode;

/// Starting weight of a child bred from `first` and `second`.
///
/// `AncestorsLog` is linear over the combined weight, despite its name.
pub fn inherited_weight(
    first: &Robot,
    second: &Robot,
    mode: InheritedWeightMode,
    percent: f64,
) -> f64 {
    if percent <= 0.0 || percent.is_nan() {
        return 0.0;
    }
    match mode {
        InheritedWeightMode::Parents => {
            mean(first.earned_weight(), second.earned_weight()) * percent
        }
        InheritedWeightMode::Ancestors => {
            mean(first.inherited_weight(), second.inherited_weight())
                + mean(first.earned_weight(), second.earned_weight()) * percent
        }
        InheritedWeightMode::AncestorsLog => mean(first.weight(), second.weight()) * percent,
    }
}

fn mean(a: f64, b: f64) -> f64 {
    (a + b) * 0.5
}
