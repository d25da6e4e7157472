//! The golden harness: the two-branch orchestration behind every assertion.
//!
//! A [`Golden`] pairs one saver with one loader over one store, plus an
//! update policy. Each assertion either records the actual value (update
//! mode) or loads the golden value and hands both to a caller-supplied
//! comparison callback. The harness never asserts equality itself; mismatch
//! reporting is entirely the callback's business.

use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::load::{BytesLoader, JsonLoader, Lines, LinesLoader, Loader, StringLoader};
use crate::save::{BytesSaver, DisplaySaver, JsonSaver, LinesSaver, Saver};
use crate::store::{GoldenFile, Store, Writer};
use crate::update::{FlagPolicy, UpdatePolicy};

/// A golden-file test harness for actual values of type `A` compared against
/// expected values of type `E`.
///
/// Create one per logical test group (namespace); the namespace scopes the
/// golden file paths. Configuration happens at construction time through the
/// consuming `with_*` methods; after that the harness is immutable and every
/// [`Golden::assert`] call runs the same two-branch flow.
pub struct Golden<A, E> {
    store: Box<dyn Store>,
    policy: Box<dyn UpdatePolicy>,
    saver: Box<dyn Saver<A>>,
    loader: Box<dyn Loader<E>>,
}

impl<A, E> Golden<A, E> {
    fn with_strategies(
        namespace: impl Into<String>,
        saver: Box<dyn Saver<A>>,
        loader: Box<dyn Loader<E>>,
    ) -> Self {
        Self {
            store: Box::new(GoldenFile::new(namespace)),
            policy: Box::new(FlagPolicy),
            saver,
            loader,
        }
    }

    /// Replaces the file store (and with it the path layout).
    pub fn with_store(mut self, store: impl Store + 'static) -> Self {
        self.store = Box::new(store);
        self
    }

    /// Replaces the update policy, e.g. with a per-name allow-list closure.
    pub fn with_update_policy(mut self, policy: impl UpdatePolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    pub fn with_saver(mut self, saver: impl Saver<A> + 'static) -> Self {
        self.saver = Box::new(saver);
        self
    }

    pub fn with_loader(mut self, loader: impl Loader<E> + 'static) -> Self {
        self.loader = Box::new(loader);
        self
    }

    /// Runs one golden assertion for the test case `name`.
    ///
    /// In update mode the actual value is recorded and no comparison happens.
    /// Otherwise the golden value is loaded and `compare` receives both
    /// values; `compare` performs the caller's assertions and reports
    /// mismatches through the host test framework. Save/load failures are
    /// returned, never swallowed.
    pub fn try_assert<F>(&self, actual: A, name: &str, compare: F) -> Result<()>
    where
        F: FnOnce(A, E),
    {
        if self.policy.is_update(name) {
            let writer: &dyn Writer = self.store.as_ref();
            return self.saver.save(&actual, name, writer);
        }

        let expected = self.loader.load(name, self.store.as_ref())?;
        compare(actual, expected);
        Ok(())
    }

    /// Like [`Golden::try_assert`], but a save/load failure aborts the test
    /// case by panicking with the rendered diagnostic.
    pub fn assert<F>(&self, actual: A, name: &str, compare: F)
    where
        F: FnOnce(A, E),
    {
        if let Err(err) = self.try_assert(actual, name, compare) {
            panic!("{:?}", miette::Report::new(err));
        }
    }
}

impl<A, E> Golden<A, E>
where
    A: Serialize + 'static,
    E: DeserializeOwned + 'static,
{
    /// A harness that records pretty-printed JSON and loads it back with
    /// serde. This is the default strategy pair.
    pub fn json(namespace: impl Into<String>) -> Self {
        Self::with_strategies(namespace, Box::new(JsonSaver), Box::new(JsonLoader))
    }
}

impl Golden<Vec<u8>, Vec<u8>> {
    /// A harness over raw bytes, recorded and loaded verbatim.
    pub fn bytes(namespace: impl Into<String>) -> Self {
        Self::with_strategies(namespace, Box::new(BytesSaver), Box::new(BytesLoader))
    }
}

impl Golden<String, String> {
    /// A harness over strings: the `Display` rendering is recorded, and the
    /// file is loaded back as UTF-8.
    pub fn string(namespace: impl Into<String>) -> Self {
        Self::with_strategies(namespace, Box::new(DisplaySaver), Box::new(StringLoader))
    }
}

impl<T: Display + 'static> Golden<Vec<T>, Lines> {
    /// A harness over line sequences: elements are recorded newline-joined,
    /// and loaded back as a lazy [`Lines`] stream.
    pub fn lines(namespace: impl Into<String>) -> Self {
        Self::with_strategies(namespace, Box::new(LinesSaver), Box::new(LinesLoader))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GoldenError;
    use crate::testutil::{MemStore, StreamStore};

    fn always_update(_name: &str) -> bool {
        true
    }

    fn never_update(_name: &str) -> bool {
        false
    }

    #[test]
    fn update_branch_records_and_skips_comparison() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Msg {
            text: String,
        }

        let golden = Golden::<Msg, Msg>::json("suite")
            .with_store(MemStore::new())
            .with_update_policy(always_update);

        golden
            .try_assert(Msg { text: "hi".to_string() }, "save-only", |_, _| {
                panic!("comparison must not run in update mode")
            })
            .unwrap();
    }

    #[test]
    fn compare_branch_receives_saved_value() {
        let store = MemStore::new();
        store.put("greeting", b"hello".to_vec());

        let golden = Golden::bytes("suite")
            .with_store(store)
            .with_update_policy(never_update);

        let mut ran = false;
        golden
            .try_assert(b"hello".to_vec(), "greeting", |actual, expected| {
                assert_eq!(actual, expected);
                ran = true;
            })
            .unwrap();
        assert!(ran);
    }

    #[test]
    fn load_failure_propagates_without_invoking_comparison() {
        let golden = Golden::bytes("suite")
            .with_store(MemStore::new())
            .with_update_policy(never_update);

        let err = golden
            .try_assert(Vec::new(), "absent", |_, _| {
                panic!("comparison must not run when loading fails")
            })
            .unwrap_err();
        assert!(matches!(err, GoldenError::Read { .. }));
    }

    #[test]
    fn per_name_policy_selects_the_branch() {
        let store = MemStore::new();
        store.put("frozen", b"old".to_vec());

        let golden = Golden::bytes("suite")
            .with_store(store)
            .with_update_policy(|name: &str| name == "fresh");

        golden.try_assert(b"new".to_vec(), "fresh", |_, _| unreachable!()).unwrap();
        golden
            .try_assert(b"old".to_vec(), "frozen", |actual, expected| {
                assert_eq!(actual, expected);
            })
            .unwrap();
    }

    #[test]
    fn string_harness_round_trips_through_a_store() {
        let store = MemStore::new();

        let recorder = Golden::string("suite")
            .with_store(store)
            .with_update_policy(always_update);
        recorder.try_assert("multi\nline".to_string(), "text", |_, _| ()).unwrap();

        // Reuse the same backing map in compare mode.
        let Golden { store, .. } = recorder;
        let checker: Golden<String, String> = Golden {
            store,
            policy: Box::new(never_update),
            saver: Box::new(DisplaySaver),
            loader: Box::new(StringLoader),
        };
        checker
            .try_assert("multi\nline".to_string(), "text", |actual, expected| {
                assert_eq!(actual, expected);
            })
            .unwrap();
    }

    #[test]
    fn lines_harness_streams_expected_lines() {
        let store = StreamStore::new();
        store.put("abc", b"a\nb\nc".to_vec());

        let golden = Golden::<Vec<String>, Lines>::lines("suite")
            .with_store(store)
            .with_update_policy(never_update);

        golden
            .try_assert(
                vec!["a".to_string(), "b".to_string(), "c".to_string()],
                "abc",
                |actual, expected| {
                    let expected: Vec<String> =
                        expected.collect::<crate::error::Result<_>>().unwrap();
                    assert_eq!(actual, expected);
                },
            )
            .unwrap();
    }

    #[test]
    fn lines_harness_rejects_non_streaming_store() {
        let golden = Golden::<Vec<String>, Lines>::lines("suite")
            .with_store(MemStore::new())
            .with_update_policy(never_update);

        let err = golden.try_assert(Vec::new(), "abc", |_, _| ()).unwrap_err();
        assert!(matches!(err, GoldenError::Unstreamable { .. }));
    }
}
