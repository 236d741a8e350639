use huffman_text_encoder::huffman::{CodingError, HuffmanCoder, HuffmanTree, WeightedSymbol};

fn main() -> Result<(), CodingError> {
    // symbol-frequency pairs
    let syms_and_freqs =
        [(0u32, 10), (1, 2), (2, 24), (3, 340), (4, 10), (5, 11)].map(WeightedSymbol::from);

    let tree = HuffmanTree::new(&syms_and_freqs)?;
    println!("huffman tree\n{}", tree);

    let coder = HuffmanCoder::from(tree);
    for (symbol, path) in coder.path_table().sorted_entries() {
        println!("{} -> {}", symbol, path);
    }

    let sequence_to_encode = vec![3, 3, 3, 2, 1, 4, 5, 3, 3, 3];
    let encoded = coder.encode(&sequence_to_encode)?;
    println!("sequence to encode\n{:?}", sequence_to_encode);
    println!("encoded sequence\n{}", encoded);

    let decoded = coder.decode(&encoded)?;
    println!("decoded sequence\n{:?}", decoded);

    let text = "abracadabra";
    let text_coder = HuffmanCoder::from_text(text)?;
    let encoded_text = text_coder.encode_text(text)?;
    println!("{} -> {} -> {}", text, encoded_text, text_coder.decode_text(&encoded_text)?);
    Ok(())
}
