//! UUID generator and related types.

use std::time;

use crate::{codec, Domain, TypedUuid, UuidV1, UuidV2, UuidV4, UuidV6, UuidV7, UuidV8};

pub mod with_rand08;

/// A trait that defines the minimum random number generator interface for [`Generator`].
pub trait RandSource {
    /// Returns the next random `u32`.
    fn next_u32(&mut self) -> u32;

    /// Returns the next random `u64`.
    fn next_u64(&mut self) -> u64;

    /// Fills `dest` with random data.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let len = chunk.len();
            chunk.copy_from_slice(&self.next_u64().to_be_bytes()[..len]);
        }
    }
}

/// A trait that defines the clock interface for [`Generator`].
pub trait TimeSource {
    /// Returns the current Unix timestamp in microseconds.
    fn unix_ts_us(&mut self) -> u64;
}

/// The default [`TimeSource`] that reads [`std::time::SystemTime`].
///
/// A clock set before the Unix epoch reads as zero.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

impl TimeSource for StdSystemTime {
    fn unix_ts_us(&mut self) -> u64 {
        time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_micros() as u64
    }
}

/// Represents a UUID generator that draws entropy from a [`RandSource`] and time from a
/// [`TimeSource`].
///
/// The generator keeps no state between calls other than its two collaborators: clock sequences
/// and node identifiers are drawn afresh for each value, and UUIDv7 values generated within the
/// same millisecond are not ordered among themselves. Substituting the collaborators makes the
/// output fully reproducible.
///
/// # Examples
///
/// ```rust
/// use uuidkit::{Domain, Generator};
///
/// let mut g = Generator::with_rand08(rand::rngs::OsRng);
/// println!("{}", g.generate_v1()); // e.g., "04c29680-833b-11ee-a46c-5f1e0c3b7a90"
/// println!("{}", g.generate_v2(1000, Domain::Uid));
/// println!("{}", g.generate_v7()); // e.g., "018bcfe5-687b-7a3c-b4e5-16b0ee97ec5d"
/// ```
///
/// ```rust
/// use uuidkit::generator::{Generator, RandSource, TimeSource};
///
/// struct ZeroRand;
///
/// impl RandSource for ZeroRand {
///     fn next_u32(&mut self) -> u32 {
///         0
///     }
///
///     fn next_u64(&mut self) -> u64 {
///         0
///     }
/// }
///
/// struct FixedTime;
///
/// impl TimeSource for FixedTime {
///     fn unix_ts_us(&mut self) -> u64 {
///         1_700_000_000_123_456
///     }
/// }
///
/// let mut g = Generator::new(ZeroRand, FixedTime);
/// assert_eq!(g.generate_v7().to_string(), "018bcfe5-687b-7000-8000-000000000000");
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Generator<R, T = StdSystemTime> {
    rand: R,
    time: T,
}

impl<R: RandSource, T: TimeSource> Generator<R, T> {
    /// Creates a generator instance.
    pub const fn new(rand: R, time: T) -> Self {
        Self { rand, time }
    }

    /// Generates a new UUIDv1 object with a random clock sequence and a random node.
    pub fn generate_v1(&mut self) -> UuidV1 {
        let timestamp = codec::gregorian_ts(self.time.unix_ts_us());
        let clock_seq = (self.rand.next_u32() & 0x3fff) as u16;
        checked(UuidV1::from_fields(timestamp, clock_seq, self.next_node()))
    }

    /// Generates a new UUIDv2 object embedding `local_id` and `domain`.
    pub fn generate_v2(&mut self, local_id: u32, domain: Domain) -> UuidV2 {
        let timestamp = codec::gregorian_ts(self.time.unix_ts_us());
        let clock_seq = (self.rand.next_u32() & 0x3f) as u8;
        checked(UuidV2::from_fields(local_id, domain, timestamp, clock_seq, self.next_node()))
    }

    /// Generates a new UUIDv4 object.
    pub fn generate_v4(&mut self) -> UuidV4 {
        let mut bytes = [0u8; 16];
        self.rand.fill_bytes(&mut bytes);
        checked(UuidV4::from_random_bytes(bytes))
    }

    /// Generates a new UUIDv6 object with a random clock sequence and a random node.
    pub fn generate_v6(&mut self) -> UuidV6 {
        let timestamp = codec::gregorian_ts(self.time.unix_ts_us());
        let clock_seq = (self.rand.next_u32() & 0x3fff) as u16;
        checked(UuidV6::from_fields(timestamp, clock_seq, self.next_node()))
    }

    /// Generates a new UUIDv7 object.
    pub fn generate_v7(&mut self) -> UuidV7 {
        const MAX_UINT48: u64 = (1 << 48) - 1;
        const MAX_UINT62: u64 = (1 << 62) - 1;

        let unix_ts_ms = (self.time.unix_ts_us() / 1_000) & MAX_UINT48;
        let rand_a = (self.rand.next_u32() & 0xfff) as u16;
        let rand_b = self.rand.next_u64() & MAX_UINT62;
        checked(UuidV7::from_fields(unix_ts_ms, rand_a, rand_b))
    }

    /// Generates a new UUIDv8 object whose 122 non-fixed bits are all random.
    pub fn generate_v8(&mut self) -> UuidV8 {
        let mut bytes = [0u8; 16];
        self.rand.fill_bytes(&mut bytes);
        checked(UuidV8::from_random_bytes(bytes))
    }

    fn next_node(&mut self) -> [u8; 6] {
        let mut node = [0u8; 6];
        self.rand.fill_bytes(&mut node);
        node
    }
}

/// Asserts the layout of a freshly generated value in debug builds and logs it.
fn checked<T: TypedUuid>(value: T) -> T {
    debug_assert!(codec::has_layout(value.as_uuid(), T::VERSION));
    tracing::trace!(uuid = %value, version = T::VERSION, "generated UUID");
    value
}

#[cfg(test)]
pub(crate) mod tests {
    use super::{with_rand08, Generator, RandSource, TimeSource};
    use crate::{Domain, TypedUuid, Uuid};

    /// Returns the same value on every draw.
    struct ConstRand(u64);

    impl RandSource for ConstRand {
        fn next_u32(&mut self) -> u32 {
            self.0 as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }
    }

    /// Stands still at a fixed instant.
    struct FixedTime(u64);

    impl TimeSource for FixedTime {
        fn unix_ts_us(&mut self) -> u64 {
            self.0
        }
    }

    const NOW_US: u64 = 1_700_000_000_123_456;

    /// Counts set bits at each position of canonical strings, most significant bit first.
    pub(crate) fn count_set_bits(samples: &[String]) -> [u32; 128] {
        let mut bins = [0u32; 128];
        for e in samples {
            let mut it = bins.iter_mut().rev();
            for c in e.chars().rev() {
                if let Some(mut num) = c.to_digit(16) {
                    for _ in 0..4 {
                        *it.next().unwrap() += num & 1;
                        num >>= 1;
                    }
                }
            }
        }
        bins
    }

    /// Asserts that the bits at `positions` are set at ~50% probability.
    pub(crate) fn assert_random_bits(bins: &[u32; 128], n_samples: usize, positions: &[usize]) {
        // set margin based on binom dist 99.999% confidence interval
        let margin = 4.417173 * (0.5 * 0.5 / n_samples as f64).sqrt();
        for &i in positions {
            let p = bins[i] as f64 / n_samples as f64;
            assert!((p - 0.5).abs() < margin, "random bit {}: {}", i, p);
        }
    }

    /// Lays out fields from substituted collaborators exactly
    #[test]
    fn lays_out_fields_from_substituted_collaborators_exactly() {
        let mut g = Generator::new(ConstRand(0), FixedTime(NOW_US));
        assert_eq!(
            g.generate_v1().to_string(),
            "04c29680-833b-11ee-8000-000000000000"
        );
        assert_eq!(
            g.generate_v2(1000, Domain::Gid).to_string(),
            "000003e8-833b-21ee-8001-000000000000"
        );
        assert_eq!(
            g.generate_v4().to_string(),
            "00000000-0000-4000-8000-000000000000"
        );
        assert_eq!(
            g.generate_v6().to_string(),
            "1ee833b0-4c29-6680-8000-000000000000"
        );
        assert_eq!(
            g.generate_v7().to_string(),
            "018bcfe5-687b-7000-8000-000000000000"
        );
        assert_eq!(
            g.generate_v8().to_string(),
            "00000000-0000-8000-8000-000000000000"
        );

        let mut g = Generator::new(ConstRand(u64::MAX), FixedTime(NOW_US));
        assert_eq!(
            g.generate_v1().to_string(),
            "04c29680-833b-11ee-bfff-ffffffffffff"
        );
        assert_eq!(
            g.generate_v2(1000, Domain::Gid).to_string(),
            "000003e8-833b-21ee-bf01-ffffffffffff"
        );
        assert_eq!(
            g.generate_v4().to_string(),
            "ffffffff-ffff-4fff-bfff-ffffffffffff"
        );
        assert_eq!(
            g.generate_v6().to_string(),
            "1ee833b0-4c29-6680-bfff-ffffffffffff"
        );
        assert_eq!(
            g.generate_v7().to_string(),
            "018bcfe5-687b-7fff-bfff-ffffffffffff"
        );
        assert_eq!(
            g.generate_v8().to_string(),
            "ffffffff-ffff-8fff-bfff-ffffffffffff"
        );
    }

    /// Exposes only values passing the shape check of their type
    #[test]
    fn exposes_only_values_passing_the_shape_check_of_their_type() {
        use crate::codec::has_layout;

        let draws = [0, u64::MAX, 0x5555_5555_5555_5555, 0xaaaa_aaaa_aaaa_aaaa];
        let clocks = [0, NOW_US, u64::MAX];
        for rand in draws {
            for time in clocks {
                let mut g = Generator::new(ConstRand(rand), FixedTime(time));
                assert!(has_layout(g.generate_v1().as_uuid(), 1));
                assert!(has_layout(g.generate_v2(7, Domain::Uid).as_uuid(), 2));
                assert!(has_layout(g.generate_v4().as_uuid(), 4));
                assert!(has_layout(g.generate_v6().as_uuid(), 6));
                assert!(has_layout(g.generate_v7().as_uuid(), 7));
                assert!(has_layout(g.generate_v8().as_uuid(), 8));

                let text = g.generate_v8().to_string();
                assert_eq!(text.parse::<crate::UuidV8>().unwrap().to_string(), text);
            }
        }
    }

    /// Recovers the injected time from generated values
    #[test]
    fn recovers_the_injected_time_from_generated_values() {
        let mut g = Generator::new(ConstRand(0x5555_5555_5555_5555), FixedTime(NOW_US));
        let ticks = NOW_US * 10 + crate::codec::GREGORIAN_OFFSET;
        assert_eq!(g.generate_v1().timestamp(), ticks);
        assert_eq!(g.generate_v6().timestamp(), ticks);
        assert_eq!(g.generate_v7().unix_ts_ms(), NOW_US / 1_000);

        let v2 = g.generate_v2(u32::MAX, Domain::Uid);
        assert_eq!(v2.local_id(), u32::MAX);
        assert_eq!(v2.domain(), Some(Domain::Uid));
    }

    /// Clamps clocks set before the Unix epoch or beyond the field range
    #[test]
    fn clamps_clocks_out_of_field_range() {
        let mut g = Generator::new(ConstRand(0), FixedTime(0));
        assert_eq!(
            g.generate_v1().to_string(),
            "13814000-1dd2-11b2-8000-000000000000"
        );
        assert_eq!(
            g.generate_v7().to_string(),
            "00000000-0000-7000-8000-000000000000"
        );

        let mut g = Generator::new(ConstRand(0), FixedTime(u64::MAX));
        assert!(crate::UuidV1::is_valid(&g.generate_v1().to_string()));
        assert!(crate::UuidV6::is_valid(&g.generate_v6().to_string()));
        assert!(crate::UuidV7::is_valid(&g.generate_v7().to_string()));
    }

    /// Fills odd-length buffers through default implementation
    #[test]
    fn fills_odd_length_buffers_through_default_implementation() {
        let mut rand = ConstRand(0x0123_4567_89ab_cdef);
        let mut buffer = [0u8; 11];
        rand.fill_bytes(&mut buffer);
        assert_eq!(
            buffer,
            [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0x01, 0x23, 0x45]
        );
    }

    /// Generates canonical strings with system clock and rand adapter
    #[test]
    fn generates_canonical_strings_with_system_clock_and_rand_adapter() {
        let mut g = Generator::with_rand08(rand::thread_rng());
        let patterns = [
            (1, r"^[0-9a-f]{8}-[0-9a-f]{4}-1[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$"),
            (2, r"^[0-9a-f]{8}-[0-9a-f]{4}-2[0-9a-f]{3}-[89ab][0-9a-f]0[01]-[0-9a-f]{12}$"),
            (4, r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$"),
            (6, r"^[0-9a-f]{8}-[0-9a-f]{4}-6[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$"),
            (7, r"^[0-9a-f]{8}-[0-9a-f]{4}-7[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$"),
            (8, r"^[0-9a-f]{8}-[0-9a-f]{4}-8[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$"),
        ];
        for (version, pattern) in patterns {
            let re = regex::Regex::new(pattern).unwrap();
            for _ in 0..1_000 {
                let e: Uuid = match version {
                    1 => g.generate_v1().into(),
                    2 => g.generate_v2(501, Domain::Gid).into(),
                    4 => g.generate_v4().into(),
                    6 => g.generate_v6().into(),
                    7 => g.generate_v7().into(),
                    _ => g.generate_v8().into(),
                };
                assert!(re.is_match(&e.to_string()), "{}", e);
                assert_eq!(e.version(), version);
            }
        }
    }

    /// Draws clock sequence and node afresh for each time-based value
    #[test]
    fn draws_clock_sequence_and_node_afresh_for_each_time_based_value() {
        use std::collections::HashSet;

        const N_SAMPLES: usize = 10_000;
        let mut g = Generator::new(
            with_rand08::Adapter(rand::thread_rng()),
            FixedTime(NOW_US),
        );
        let v1: HashSet<_> = (0..N_SAMPLES).map(|_| g.generate_v1()).collect();
        let v6: HashSet<_> = (0..N_SAMPLES).map(|_| g.generate_v6()).collect();
        let v7: HashSet<_> = (0..N_SAMPLES).map(|_| g.generate_v7()).collect();
        assert_eq!(v1.len(), N_SAMPLES);
        assert_eq!(v6.len(), N_SAMPLES);
        assert_eq!(v7.len(), N_SAMPLES);
    }

    /// Sets constant bits and random bits properly
    #[test]
    fn sets_constant_bits_and_random_bits_properly() {
        const N_SAMPLES: usize = 100_000;
        let mut g = Generator::with_rand08(rand::thread_rng());
        let samples: Vec<String> = (0..N_SAMPLES).map(|_| g.generate_v8().into()).collect();
        let bins = count_set_bits(&samples);

        // test if constant bits are all set to 1 or 0
        let n = N_SAMPLES as u32;
        assert_eq!(bins[48], n, "version bit 48");
        assert_eq!(bins[49], 0, "version bit 49");
        assert_eq!(bins[50], 0, "version bit 50");
        assert_eq!(bins[51], 0, "version bit 51");
        assert_eq!(bins[64], n, "variant bit 64");
        assert_eq!(bins[65], 0, "variant bit 65");

        let positions: Vec<usize> = (0..48).chain(52..64).chain(66..128).collect();
        assert_random_bits(&bins, N_SAMPLES, &positions);
    }
}
