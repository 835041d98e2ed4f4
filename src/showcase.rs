use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use treekit::display::branch_lines;
use treekit::knight;
use treekit::map::HashMap;
use treekit::tree::Tree;

#[derive(Parser)]
#[command(name = "showcase")]
#[command(about = "A walkthrough of the tree, map, and knight-path structures")]
struct Args {
    #[arg(long, default_value = "12")]
    size: usize,

    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    tree_demo(args.size, &mut rng);
    map_demo();
    knight_demo();
}

fn tree_demo(size: usize, rng: &mut StdRng) {
    let values: Vec<i32> = (0..size).map(|_| rng.random_range(0..100)).collect();
    println!("Building a tree from {:?}", values);

    let mut tree = Tree::from_values(values);
    print_tree(&tree);
    println!("height {}, balanced: {}", tree.height(), tree.is_balanced());

    print!("level-order:");
    tree.for_each_level_order(|value| print!(" {}", value));
    println!();
    print!("in-order:   ");
    tree.for_each_in_order(|value| print!(" {}", value));
    println!();
    print!("pre-order:  ");
    tree.for_each_pre_order(|value| print!(" {}", value));
    println!();
    print!("post-order: ");
    tree.for_each_post_order(|value| print!(" {}", value));
    println!();

    for value in 100..110 {
        tree.insert(value);
    }
    println!(
        "after ten ascending inserts: height {}, balanced: {}",
        tree.height(),
        tree.is_balanced()
    );

    tree.rebalance();
    println!(
        "after rebalance: height {}, balanced: {}",
        tree.height(),
        tree.is_balanced()
    );
    print_tree(&tree);
}

fn print_tree(tree: &Tree<i32>) {
    for line in branch_lines(tree) {
        println!("{}", line);
    }
}

fn map_demo() {
    let mut map = HashMap::new();
    for (name, order) in [("mercury", 1), ("venus", 2), ("earth", 3), ("mars", 4)] {
        map.insert(name, order);
    }

    println!("\nThe map holds {} planets", map.len());
    println!("earth is planet number {:?}", map.get(&"earth"));
    map.remove(&"venus");
    let mut names: Vec<&str> = map.keys().copied().collect();
    names.sort_unstable();
    println!("after removing venus: {:?}", names);
}

fn knight_demo() {
    println!();
    for (start, end) in [((0, 0), (3, 3)), ((3, 3), (0, 0)), ((0, 0), (7, 7)), ((3, 3), (4, 3))] {
        println!("knight from {:?} to {:?}:", start, end);
        match knight::shortest_path(start, end) {
            Ok(path) => {
                println!("=> You made it in {} moves! Here's your path:", path.len() - 1);
                for (x, y) in &path {
                    println!("   [{}, {}]", x, y);
                }
            }
            Err(err) => println!("=> {}", err),
        }
    }
}
