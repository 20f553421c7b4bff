use anthro_core::{Indicator, cut_points, flag_limits};

fn render() -> String {
    let mut out = String::new();
    for indicator in Indicator::ALL {
        let limits = flag_limits(indicator);
        out.push_str(&format!(
            "{} (flag below {} or above {})\n",
            indicator.code(),
            limits.low,
            limits.high
        ));
        for interval in cut_points(indicator).intervals() {
            out.push_str(&format!("  {:<14} {}\n", interval.to_string(), interval.status));
        }
    }
    out
}

#[test]
fn cut_point_tables_are_stable() {
    insta::assert_snapshot!(render(), @r"
    wfa (flag below -6 or above 5)
      z < -3         severely-underweight
      -3 ≤ z < -2    underweight
      -2 ≤ z ≤ +1    normal
      z > +1         overweight
    lhfa (flag below -6 or above 6)
      z < -3         severely-stunted
      -3 ≤ z < -2    stunted
      -2 ≤ z ≤ +3    normal
      z > +3         tall
    hcfa (flag below -5 or above 5)
      z < -3         severe-microcephaly
      -3 ≤ z < -2    microcephaly
      -2 ≤ z ≤ +2    normal
      +2 < z ≤ +3    macrocephaly
      z > +3         severe-macrocephaly
    wfl (flag below -5 or above 5)
      z < -3         severely-wasted
      -3 ≤ z < -2    wasted
      -2 ≤ z ≤ +1    normal
      +1 < z ≤ +2    possible-risk-of-overweight
      +2 < z ≤ +3    overweight
      z > +3         obese
    ");
}
