/// Formats a parameter value the way LAMMPS input files expect.
///
/// Whole numbers keep one decimal place (`10.0`, not `10`) so columns stay
/// visibly floating-point; everything else uses the shortest `f64` display.
pub fn fmt_param(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
