use avl_index::Tree;

fn main() {
    let tree: Tree<i32> = (1..=6).collect();

    println!("Pre-order dump (key  (height)):");
    tree.print();
}
