use std::collections::BTreeSet;

use treekit::tree::Tree;

quickcheck::quickcheck! {
    fn build_sorts_and_dedups(xs: Vec<i8>) -> bool {
        let tree = Tree::from_values(xs.clone());
        let expected: Vec<i8> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();

        let mut visited = Vec::new();
        tree.for_each_in_order(|value| visited.push(*value));
        visited == expected && tree.len() == expected.len()
    }

    fn build_is_balanced(xs: Vec<i8>) -> bool {
        Tree::from_values(xs).is_balanced()
    }

    fn insert_then_find(xs: Vec<i8>, fresh: i8) -> bool {
        let mut tree = Tree::from_values(xs);
        tree.insert(fresh);
        tree.find(&fresh).map(|node| *node.value()) == Some(fresh)
    }

    fn delete_then_miss(xs: Vec<i8>, victim: i8) -> bool {
        let mut tree = Tree::from_values(xs);
        tree.delete(&victim);
        tree.find(&victim).is_none()
    }

    fn deletes_leave_the_rest_intact(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = Tree::from_values(xs.clone());
        for delete in &deletes {
            tree.delete(delete);
        }

        let remaining: BTreeSet<i8> = xs
            .into_iter()
            .filter(|x| !deletes.contains(x))
            .collect();

        deletes.iter().all(|x| tree.find(x).is_none())
            && remaining.iter().all(|x| tree.contains(x))
    }

    fn level_order_forms_agree(xs: Vec<i8>) -> bool {
        let tree = Tree::from_values(xs);

        let mut queued = Vec::new();
        tree.for_each_level_order(|value| queued.push(*value));
        let mut layered = Vec::new();
        tree.for_each_level_order_recursive(|value| layered.push(*value));
        queued == layered
    }
}
