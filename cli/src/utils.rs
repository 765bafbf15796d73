/// Group digits in thousands: `12345` -> `"12,345"`.
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }

    formatted
}

/// Render a route cost, with `∞` for an unreachable target.
pub fn format_cost(cost: f64) -> String {
    if cost.is_infinite() {
        "∞".to_string()
    } else {
        format!("{:.2}", cost)
    }
}
