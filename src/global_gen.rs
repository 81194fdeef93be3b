//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::{Domain, Result, UuidV1, UuidV2, UuidV4, UuidV6, UuidV7, UuidV8};
use inner::GlobalGenInner;

/// Returns the lock handle of process-wide global generator, creating one if none exists.
fn lock_global_gen() -> sync::MutexGuard<'static, GlobalGenInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    G.get_or_init(Default::default)
        .lock()
        .unwrap_or_else(sync::PoisonError::into_inner)
}

impl UuidV1 {
    /// Generates a UUIDv1 object from the current time, a random clock sequence, and a random
    /// node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidkit::UuidV1;
    ///
    /// let uuid = UuidV1::generate();
    /// println!("{}", uuid); // e.g., "04c29680-833b-11ee-a46c-5f1e0c3b7a90"
    /// ```
    pub fn generate() -> Self {
        lock_global_gen().get_mut().generate_v1()
    }
}

impl UuidV2 {
    /// Generates a UUIDv2 object embedding `local_id` and the domain named by `domain` (`"uid"`
    /// or `"gid"`, case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `domain` names neither
    /// of the POSIX domains.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidkit::UuidV2;
    ///
    /// let uuid = UuidV2::generate(1000, "GID")?;
    /// assert_eq!(uuid.local_id(), 1000);
    /// assert!(UuidV2::generate(1000, "banana").is_err());
    /// # Ok::<(), uuidkit::Error>(())
    /// ```
    pub fn generate(local_id: u32, domain: &str) -> Result<Self> {
        let domain = domain.parse::<Domain>()?;
        Ok(lock_global_gen().get_mut().generate_v2(local_id, domain))
    }
}

impl UuidV4 {
    /// Generates a UUIDv4 object.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let uuid = uuidkit::UuidV4::generate();
    /// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
    /// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
    /// ```
    pub fn generate() -> Self {
        lock_global_gen().get_mut().generate_v4()
    }
}

impl UuidV6 {
    /// Generates a UUIDv6 object from the current time, a random clock sequence, and a random
    /// node.
    pub fn generate() -> Self {
        lock_global_gen().get_mut().generate_v6()
    }
}

impl UuidV7 {
    /// Generates a UUIDv7 object from the current time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let uuid = uuidkit::UuidV7::generate();
    /// println!("{}", uuid); // e.g., "018bcfe5-687b-7a3c-b4e5-16b0ee97ec5d"
    ///
    /// let uuid_string: String = uuidkit::UuidV7::generate().into();
    /// ```
    pub fn generate() -> Self {
        lock_global_gen().get_mut().generate_v7()
    }
}

impl UuidV8 {
    /// Generates a UUIDv8 object whose 122 non-fixed bits are all random.
    pub fn generate() -> Self {
        lock_global_gen().get_mut().generate_v8()
    }
}

mod inner {
    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Core;

    use crate::generator::{Generator, RandSource};

    /// The type alias for the random number generator of the global generator.
    ///
    /// The global generator currently employs [`ChaCha12Core`] with [`ReseedingRng`] wrapper to
    /// emulate the strategy used by [`rand::rngs::ThreadRng`].
    #[derive(Debug)]
    pub struct GlobalGenRng(ReseedingRng<ChaCha12Core, OsRng>);

    impl RandSource for GlobalGenRng {
        fn next_u32(&mut self) -> u32 {
            rand::RngCore::next_u32(&mut self.0)
        }

        fn next_u64(&mut self) -> u64 {
            rand::RngCore::next_u64(&mut self.0)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            rand::RngCore::fill_bytes(&mut self.0, dest)
        }
    }

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    #[derive(Debug)]
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        generator: Generator<GlobalGenRng>,
    }

    impl Default for GlobalGenInner {
        fn default() -> Self {
            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                generator: Generator::new(
                    GlobalGenRng(ReseedingRng::new(
                        ChaCha12Core::from_entropy(),
                        1024 * 64,
                        OsRng,
                    )),
                    Default::default(),
                ),
            }
        }
    }

    impl GlobalGenInner {
        /// Returns a mutable reference to the inner [`Generator`] instance, reseeding the
        /// random number generator on Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> &mut Generator<GlobalGenRng> {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                tracing::debug!("process ID changed; reseeding global generator");
                *self = Default::default();
            }
            &mut self.generator
        }
    }
}



#[cfg(test)]
mod tests_time_based {
    use crate::{codec, Domain, Error, TypedUuid, UuidV1, UuidV2, UuidV6, UuidV8};

    fn now_gregorian_ts() -> u64 {
        use std::time;
        let unix_ts_us = time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .expect("clock may have gone backwards")
            .as_micros() as u64;
        codec::gregorian_ts(unix_ts_us)
    }

    /// Encodes up-to-date Gregorian timestamp
    #[test]
    fn encodes_up_to_date_gregorian_timestamp() {
        // 100 milliseconds in 100-nanosecond ticks
        const TOLERANCE: i64 = 1_000_000;
        for _ in 0..1_000 {
            let ts_now = now_gregorian_ts() as i64;
            assert!((ts_now - UuidV1::generate().timestamp() as i64).abs() < TOLERANCE);
            assert!((ts_now - UuidV6::generate().timestamp() as i64).abs() < TOLERANCE);
        }
    }

    /// Generates UUIDv6 strings sortable across clock ticks
    #[test]
    fn generates_uuidv6_strings_sortable_across_clock_ticks() {
        let prev = UuidV6::generate().to_string();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let curr = UuidV6::generate().to_string();
        assert!(prev < curr);
    }

    /// Generates distinct time-based values
    #[test]
    fn generates_distinct_time_based_values() {
        use std::collections::HashSet;
        let v1: HashSet<_> = (0..10_000).map(|_| UuidV1::generate()).collect();
        let v6: HashSet<_> = (0..10_000).map(|_| UuidV6::generate()).collect();
        let v8: HashSet<_> = (0..10_000).map(|_| UuidV8::generate()).collect();
        assert_eq!(v1.len(), 10_000);
        assert_eq!(v6.len(), 10_000);
        assert_eq!(v8.len(), 10_000);
    }

    /// Embeds local identifier and domain in UUIDv2
    #[test]
    fn embeds_local_identifier_and_domain_in_uuidv2() {
        let cases = [
            (0, "uid", Domain::Uid),
            (1000, "gid", Domain::Gid),
            (u32::MAX, "UID", Domain::Uid),
            (501, "Gid", Domain::Gid),
        ];
        for (local_id, name, domain) in cases {
            let e = UuidV2::generate(local_id, name).unwrap();
            assert!(UuidV2::is_valid(&e.to_string()));
            assert_eq!(e.local_id(), local_id);
            assert_eq!(e.domain(), Some(domain));
            assert_eq!(&e.to_string()[..8], format!("{:08x}", local_id));
        }
    }

    /// Rejects unknown UUIDv2 domain
    #[test]
    fn rejects_unknown_uuidv2_domain() {
        for name in ["banana", "", "org", " uid"] {
            assert!(matches!(
                UuidV2::generate(1000, name),
                Err(Error::InvalidArgument(_))
            ));
        }
    }
}
