use rand::Rng;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub(crate) const CODE_LENGTH: usize = 6;

/// Short code handed out for sharing a quiz. Collisions are resolved by the
/// caller retrying against the store's uniqueness constraint.
pub(crate) fn generate_code() -> String {
    let mut rng = rand::thread_rng();
    let mut output = String::with_capacity(CODE_LENGTH);
    for _ in 0..CODE_LENGTH {
        let index = rng.gen_range(0..ALPHABET.len());
        output.push(ALPHABET[index] as char);
    }
    output
}
