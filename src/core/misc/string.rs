use crate::core::base::*;

/// `[1, 2, 2, 1]`
pub fn format_floats(v: &[Float]) -> String {
    let s: Vec<String> = v.iter().map(|x| format!("{}", x)).collect();
    return format!("[{}]", s.join(", "));
}

/// Indents every line of `s` but the first by `amount` spaces.
pub fn indent(s: &str, amount: usize) -> String {
    let pad = " ".repeat(amount);
    let lines: Vec<&str> = s.split('\n').collect();
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
            if !line.is_empty() {
                out.push_str(&pad);
            }
        }
        out.push_str(line);
    }
    return out;
}
