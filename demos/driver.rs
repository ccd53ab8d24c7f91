//! Builds a random tree, knocks it out of balance with random inserts and rebalances it,
//! printing the tree along the way.
//!
//! ```text
//! cargo run --example driver -- [SIZE] [INSERTS]
//! ```

use std::error::Error;

use balanced_bst::{Order, Tree};
use rand::Rng;

const DEFAULT_SIZE: usize = 15;
const DEFAULT_INSERTS: usize = 10;

fn print_traversals(tree: &Tree<u32>) {
    for (name, order) in [
        ("level order", Order::Level),
        ("preorder", Order::Pre),
        ("postorder", Order::Post),
        ("inorder", Order::In),
    ] {
        println!("{:>11}: {:?}", name, tree.traverse(order));
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let size = args
        .next()
        .map(|s| s.parse::<usize>())
        .transpose()?
        .unwrap_or(DEFAULT_SIZE);
    let inserts = args
        .next()
        .map(|s| s.parse::<usize>())
        .transpose()?
        .unwrap_or(DEFAULT_INSERTS);

    let mut tree = Tree::random(size)?;
    println!("balanced: {}", tree.is_balanced());
    print_traversals(&tree);
    print!("{}", tree);

    let mut rng = rand::thread_rng();
    for _ in 0..inserts {
        tree.insert(rng.gen_range(0..1000));
    }

    print!("{}", tree);
    println!("balanced: {}", tree.is_balanced());

    tree.rebalance();
    print!("{}", tree);
    println!("balanced: {}", tree.is_balanced());
    print_traversals(&tree);

    Ok(())
}
