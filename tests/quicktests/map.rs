use std::collections::HashMap as StdHashMap;

use treekit::map::HashMap;

use crate::Op;

/// Applies a set of operations to the bucketed map and the standard
/// library's map. This way we can ensure that after a random smattering
/// of inserts and removes we have the same set of entries in both.
fn do_ops<K, V>(ops: &[Op<K, V>], map: &mut HashMap<K, V>, oracle: &mut StdHashMap<K, V>)
where
    K: std::hash::Hash + Eq + Clone,
    V: std::fmt::Debug + PartialEq + Clone,
{
    for op in ops {
        match op {
            Op::Insert(key, value) => {
                assert_eq!(
                    map.insert(key.clone(), value.clone()),
                    oracle.insert(key.clone(), value.clone())
                );
            }
            Op::Remove(key) => {
                assert_eq!(map.remove(key), oracle.remove(key));
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
        let mut map = HashMap::new();
        let mut oracle = StdHashMap::new();

        do_ops(&ops, &mut map, &mut oracle);
        map.len() == oracle.len() && oracle.keys().all(|key| map.get(key) == oracle.get(key))
    }

    fn contains(xs: Vec<i8>) -> bool {
        let mut map = HashMap::new();
        for x in &xs {
            map.insert(*x, *x);
        }

        xs.iter().all(|x| map.get(x) == Some(x))
    }
}
