//! Форматирование цен и количеств для списков и подсказок

/// Группирует цифры целой части по три, разделитель `,`
fn group_thousands(integer: &str) -> String {
    let digits: Vec<char> = integer.chars().collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*c);
    }
    out
}

/// Число с фиксированным количеством знаков и разделителем тысяч
pub fn format_decimal(value: f64, decimals: usize) -> String {
    let raw = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };
    let sign = if value < 0.0 && raw.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    match fraction {
        Some(f) => format!("{sign}{}.{f}", group_thousands(integer)),
        None => format!("{sign}{}", group_thousands(integer)),
    }
}

/// Цена в солях: `S/ 1,234.50`
pub fn format_soles(value: f64) -> String {
    format!("S/ {}", format_decimal(value, 2))
}

/// Количество с единицей измерения, без лишних нулей: `12.5 kg`
pub fn format_quantity(value: f64, unidad: &str) -> String {
    let fixed = format_decimal(value, 3);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    format!("{trimmed} {unidad}")
}
