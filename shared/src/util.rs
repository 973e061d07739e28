/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a Snowflake-style i64 used as the suffix of member, payment
/// and request ids.
///
/// Layout (53 bits, safe to hand to JSON consumers as a number):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random. 4096 values per millisecond is far beyond the
///     admission and payment rate of a single reading hall.
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const ID_EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - ID_EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

/// Lowercase a display name and collapse whitespace runs into dots.
///
/// `"Asha  Kumari"` becomes `"asha.kumari"`. Used for synthesized
/// email local parts.
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(".")
}
