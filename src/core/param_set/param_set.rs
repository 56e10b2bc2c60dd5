use crate::core::base::*;
use crate::core::error::*;
use crate::core::parser::*;

use log::*;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// Named plugin parameters, kept in insertion order.
#[derive(Debug, Default, Clone)]
pub struct ParamSet {
    pub bools: HashMap<String, Vec<bool>>,
    pub floats: HashMap<String, Vec<Float>>,
    pub strings: HashMap<String, Vec<String>>,
    pub keys: Vec<String>,
    looked_up: RefCell<HashSet<String>>,
}

fn add_values<T: Clone>(k: &mut Vec<String>, m: &mut HashMap<String, Vec<T>>, key: &str, v: &[T]) {
    if !k.iter().any(|x| x == key) {
        k.push(key.to_string());
    }
    m.insert(key.to_string(), Vec::from(v));
}

fn get_values<T: Clone>(m: &HashMap<String, Vec<T>>, key: &str) -> Vec<T> {
    match m.get(key) {
        Some(r) => r.clone(),
        _ => Vec::<T>::new(),
    }
}

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn mark(&self, key: &str) {
        self.looked_up.borrow_mut().insert(key.to_string());
    }

    //--------------------

    pub fn add_bool(&mut self, key: &str, v: bool) {
        add_values(&mut self.keys, &mut self.bools, key, &[v]);
    }

    pub fn add_float(&mut self, key: &str, v: Float) {
        add_values(&mut self.keys, &mut self.floats, key, &[v]);
    }

    pub fn add_floats(&mut self, key: &str, v: &[Float]) {
        add_values(&mut self.keys, &mut self.floats, key, v);
    }

    pub fn add_string(&mut self, key: &str, v: &str) {
        add_values(&mut self.keys, &mut self.strings, key, &[String::from(v)]);
    }

    pub fn add_strings(&mut self, key: &str, v: &[&str]) {
        let vv: Vec<String> = v.iter().map(|s| String::from(*s)).collect();
        add_values(&mut self.keys, &mut self.strings, key, &vv);
    }

    //--------------------

    pub fn get_bools(&self, key: &str) -> Vec<bool> {
        return get_values(&self.bools, key);
    }

    pub fn get_floats(&self, key: &str) -> Vec<Float> {
        return get_values(&self.floats, key);
    }

    pub fn get_strings(&self, key: &str) -> Vec<String> {
        return get_values(&self.strings, key);
    }

    pub fn has_param(&self, key: &str) -> bool {
        return self.keys.iter().any(|k| k == key);
    }

    pub fn get_keys(&self) -> Vec<String> {
        return self.keys.clone();
    }

    //--------------------

    /// Looks `key` up as a float list. Accepts either a float array or
    /// a single string in comma separated text form.
    pub fn find_float_list(&self, key: &str) -> Result<Option<Vec<Float>>, SpectrumError> {
        if let Some(v) = self.floats.get(key) {
            self.mark(key);
            return Ok(Some(v.clone()));
        }
        if let Some(v) = self.strings.get(key) {
            self.mark(key);
            if v.len() > 1 {
                warn!(
                    "More than one string present for float list \"{}\". Using first.",
                    key
                );
            }
            let s = v.first().map(|s| s.as_str()).unwrap_or("");
            return parse_float_list(key, s).map(Some);
        }
        return Ok(None);
    }

    /// Warns about every parameter nobody looked up and returns their names.
    pub fn report_unused(&self) -> Vec<String> {
        let looked_up = self.looked_up.borrow();
        let unused: Vec<String> = self
            .keys
            .iter()
            .filter(|k| !looked_up.contains(*k))
            .cloned()
            .collect();
        for k in unused.iter() {
            warn!("Parameter \"{}\" not used", k);
        }
        return unused;
    }
}
