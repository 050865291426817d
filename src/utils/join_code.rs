use rand::{thread_rng, Rng};

/// Lowest and highest six-digit join codes.
const MIN_CODE: i32 = 100_000;
const MAX_CODE: i32 = 999_999;

/// Random six-digit code players type to join a session.
///
/// Uniqueness is left to the `sessions.session_code` constraint.
pub fn generate_join_code() -> i32 {
    thread_rng().gen_range(MIN_CODE..=MAX_CODE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_have_six_digits() {
        for _ in 0..1_000 {
            let code = generate_join_code();
            assert_eq!(code.to_string().len(), 6, "code {}", code);
        }
    }
}
