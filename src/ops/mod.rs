pub mod coords;
pub mod galois;
pub mod primes;
pub mod projective;

pub use self::coords::{coords_to_pixels, radius_to_pixels};
pub use self::galois::GaloisField;
pub use self::primes::{is_prime, is_prime_power, prime_power_parts};
pub use self::projective::{deck_size, incidence_matrix, plane_size, ProjectivePlane};
