use super::traverse::*;
use crate::core::base::*;
use crate::core::error::*;

use log::*;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct SceneParameter {
    pub value: Vec<Float>,
    pub flags: ParamFlags,
}

#[derive(Debug, Default)]
struct Collector {
    params: BTreeMap<String, SceneParameter>,
}

impl TraversalCallback for Collector {
    fn put_parameter(&mut self, name: &str, value: &[Float], flags: ParamFlags) {
        self.params.insert(
            String::from(name),
            SceneParameter {
                value: Vec::from(value),
                flags,
            },
        );
    }
}

/// Snapshot of an object's parameters plus pending writes.
///
/// Reads always see the committed values. Writes are staged and reach the
/// object only through [`SceneParameters::update`].
#[derive(Debug, Default, Clone)]
pub struct SceneParameters {
    committed: BTreeMap<String, SceneParameter>,
    staged: ParameterUpdates,
}

impl SceneParameters {
    pub fn traverse<T: Traversable + ?Sized>(obj: &T) -> Self {
        let mut collector = Collector::default();
        obj.traverse(&mut collector);
        SceneParameters {
            committed: collector.params,
            staged: ParameterUpdates::new(),
        }
    }

    pub fn keys(&self) -> Vec<String> {
        return self.committed.keys().cloned().collect();
    }

    pub fn contains(&self, key: &str) -> bool {
        return self.committed.contains_key(key);
    }

    pub fn get(&self, key: &str) -> Option<&[Float]> {
        return self.committed.get(key).map(|p| p.value.as_slice());
    }

    pub fn flags(&self, key: &str) -> Option<ParamFlags> {
        return self.committed.get(key).map(|p| p.flags);
    }

    pub fn staged(&self, key: &str) -> Option<&[Float]> {
        return self.staged.get(key).map(|v| v.as_slice());
    }

    pub fn is_dirty(&self) -> bool {
        return !self.staged.is_empty();
    }

    pub fn set(&mut self, key: &str, value: &[Float]) -> Result<(), SpectrumError> {
        if !self.contains(key) {
            return Err(SpectrumError::UnknownParameter(String::from(key)));
        }
        self.staged.insert(String::from(key), Vec::from(value));
        Ok(())
    }

    /// Drops every staged write.
    pub fn discard(&mut self) {
        self.staged.clear();
    }

    /// Pushes the staged writes into `obj` and returns the updated keys.
    ///
    /// On error `obj` and this snapshot keep their committed values and the
    /// staged writes stay pending, so a corrected write can be retried.
    pub fn update<T: Traversable + ?Sized>(
        &mut self,
        obj: &mut T,
    ) -> Result<Vec<String>, SpectrumError> {
        if self.staged.is_empty() {
            return Ok(Vec::new());
        }
        obj.parameters_changed(&self.staged)?;
        let keys: Vec<String> = self.staged.keys().cloned().collect();
        debug!("Updated parameters {:?}", keys);
        *self = Self::traverse(&*obj);
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // two values that must stay the same length
    struct Pair {
        a: Vec<Float>,
        b: Vec<Float>,
    }

    impl Traversable for Pair {
        fn traverse(&self, callback: &mut dyn TraversalCallback) {
            callback.put_parameter("a", &self.a, ParamFlags::NonDifferentiable);
            callback.put_parameter("b", &self.b, ParamFlags::Differentiable);
        }

        fn parameters_changed(&mut self, updates: &ParameterUpdates) -> Result<(), SpectrumError> {
            let a = updates.get("a").unwrap_or(&self.a).clone();
            let b = updates.get("b").unwrap_or(&self.b).clone();
            if a.len() != b.len() {
                return Err(SpectrumError::SizeMismatch {
                    expected: a.len(),
                    actual: b.len(),
                });
            }
            self.a = a;
            self.b = b;
            Ok(())
        }
    }

    #[test]
    fn test_001() {
        let pair = Pair {
            a: vec![1.0],
            b: vec![2.0],
        };
        let params = SceneParameters::traverse(&pair);
        assert_eq!(params.keys(), vec!["a", "b"]);
        assert_eq!(params.get("a"), Some(&[1.0][..]));
        assert_eq!(params.flags("b"), Some(ParamFlags::Differentiable));
        assert_eq!(params.get("c"), None);
    }

    #[test]
    fn test_002() {
        let mut pair = Pair {
            a: vec![1.0],
            b: vec![2.0],
        };
        let mut params = SceneParameters::traverse(&pair);
        params.set("a", &[3.0, 4.0]).unwrap();
        // staged writes are not visible yet
        assert_eq!(params.get("a"), Some(&[1.0][..]));
        assert_eq!(params.staged("a"), Some(&[3.0, 4.0][..]));
        assert!(params.is_dirty());

        let r = params.update(&mut pair);
        assert!(matches!(r, Err(SpectrumError::SizeMismatch { .. })));
        assert_eq!(pair.a, vec![1.0]);
        assert_eq!(params.get("a"), Some(&[1.0][..]));
        assert!(params.is_dirty());

        params.set("b", &[5.0, 6.0]).unwrap();
        let keys = params.update(&mut pair).unwrap();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(pair.b, vec![5.0, 6.0]);
        assert_eq!(params.get("a"), Some(&[3.0, 4.0][..]));
        assert!(!params.is_dirty());
    }

    #[test]
    fn test_003() {
        let mut pair = Pair {
            a: vec![1.0],
            b: vec![2.0],
        };
        let mut params = SceneParameters::traverse(&pair);
        assert!(matches!(
            params.set("c", &[1.0]),
            Err(SpectrumError::UnknownParameter(_))
        ));
        assert_eq!(params.update(&mut pair).unwrap(), Vec::<String>::new());
        params.set("a", &[9.0, 9.0]).unwrap();
        params.discard();
        assert!(!params.is_dirty());
    }
}
