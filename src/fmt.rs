/// Format an amount for display with thousands separators: -$1,234.50
pub fn money(val: f64) -> String {
    let fixed = format!("{:.2}", val.abs());
    let (int_part, dec_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits = int_part.as_bytes();
    let mut out = String::with_capacity(fixed.len() + digits.len() / 3 + 2);
    if val < 0.0 {
        out.push('-');
    }
    out.push('$');
    for (i, d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*d as char);
    }
    out.push('.');
    out.push_str(dec_part);
    out
}
