//! Service flavors and their wire tags.
//!
//! A flavor is fixed per binary at compile time. It is asserted by the
//! sender's request tag and checked against the daemon's own flavor; it is
//! never negotiated.

use std::fmt;

use otpad_core::Direction;

/// Tag a daemon sends when the asserted flavor does not match its own.
pub const REJECT_TAG: &str = "invalid";

/// Which half of the service a process belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    Encrypt,
    Decrypt,
}

impl Flavor {
    /// Tag a sender of this flavor opens the handshake with.
    pub fn request_tag(&self) -> &'static str {
        match self {
            Flavor::Encrypt => "enc_bs",
            Flavor::Decrypt => "dec_bs",
        }
    }

    /// Tag a daemon of this flavor replies with on acceptance.
    pub fn accept_tag(&self) -> &'static str {
        match self {
            Flavor::Encrypt => "enc_d_bs",
            Flavor::Decrypt => "dec_d_bs",
        }
    }

    /// Cipher direction a daemon of this flavor applies.
    pub fn direction(&self) -> Direction {
        match self {
            Flavor::Encrypt => Direction::Encrypt,
            Flavor::Decrypt => Direction::Decrypt,
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flavor::Encrypt => write!(f, "encrypt"),
            Flavor::Decrypt => write!(f, "decrypt"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_tags() {
        assert_eq!(Flavor::Encrypt.request_tag(), "enc_bs");
        assert_eq!(Flavor::Decrypt.request_tag(), "dec_bs");
    }

    #[test]
    fn test_accept_tags() {
        assert_eq!(Flavor::Encrypt.accept_tag(), "enc_d_bs");
        assert_eq!(Flavor::Decrypt.accept_tag(), "dec_d_bs");
    }

    #[test]
    fn test_tags_are_distinct() {
        let tags = [
            Flavor::Encrypt.request_tag(),
            Flavor::Decrypt.request_tag(),
            Flavor::Encrypt.accept_tag(),
            Flavor::Decrypt.accept_tag(),
            REJECT_TAG,
        ];
        for (i, a) in tags.iter().enumerate() {
            for b in tags.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_direction_mapping() {
        assert_eq!(Flavor::Encrypt.direction(), Direction::Encrypt);
        assert_eq!(Flavor::Decrypt.direction(), Direction::Decrypt);
    }

    #[test]
    fn test_display() {
        assert_eq!(Flavor::Encrypt.to_string(), "encrypt");
        assert_eq!(Flavor::Decrypt.to_string(), "decrypt");
    }
}
