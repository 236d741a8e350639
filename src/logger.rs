use crate::huffman::{HuffmanCoder, Symbol};

#[ctor::ctor]
fn init() {
    use log4rs;
    if let Err(e) = log4rs::init_file("log4rs.yaml", Default::default()) {
        eprintln!("Logging disabled, unable to load log4rs.yaml: {}", e);
    }
}

pub fn log_code_table<S: Symbol>(coder: &HuffmanCoder<S>) {
    let tree = coder.tree();
    log::debug!(
        "Huffman tree over {} symbols, {} distinct, depth {}",
        tree.weight(),
        tree.leaf_count(),
        tree.depth()
    );
    for (symbol, path) in coder.path_table().sorted_entries() {
        log::debug!("{:?} -> {}", symbol, path);
    }
}
