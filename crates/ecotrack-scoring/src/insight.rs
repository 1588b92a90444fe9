use ecotrack_core::models::Factor;

/// One-sentence takeaway naming the highest-impact factor.
pub fn key_insight(primary: Option<Factor>) -> String {
    match primary {
        Some(factor) => format!(
            "Your highest environmental impact comes from {factor}. \
             Reducing this area will produce the fastest carbon reduction."
        ),
        None => "No contributing factors were ranked.".to_string(),
    }
}
