pub fn validate_game_name(name: &str) -> Result<(), String> {
    const MAX: usize = 100;
    if !(1..=MAX).contains(&name.len()) {
        return Err(format!(
            "Failed game name length check: 1 <= length={} <= {MAX}",
            name.len()
        ));
    }
    Ok(())
}

pub fn validate_category(category: &str) -> Result<(), String> {
    if category.is_empty() {
        return Err("category must not be empty".to_owned());
    }
    Ok(())
}

pub fn validate_winner(winner: &str) -> Result<(), String> {
    if winner.is_empty() {
        return Err("winner must not be empty".to_owned());
    }
    Ok(())
}

pub fn parse_positive(field: &str, s: &str) -> Result<i32, String> {
    let value: i32 = s
        .trim()
        .parse()
        .map_err(|_| format!("{field}: '{s}' is not an integer"))?;
    if value <= 0 {
        return Err(format!("{field}: {value} expected to be positive"));
    }
    Ok(value)
}

pub fn parse_score(s: &str) -> Result<i32, String> {
    s.trim()
        .parse()
        .map_err(|_| format!("winner_score: '{s}' is not an integer"))
}

pub fn parse_date(s: &str) -> Result<time::Date, String> {
    let format = time::macros::format_description!("[year]-[month]-[day]");
    time::Date::parse(s.trim(), &format).map_err(|e| format!("date: '{s}': {e}"))
}
