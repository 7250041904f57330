//! Demonstration driver: runs a fixed sequence of range constructions and
//! searches over hardcoded data and prints the results.

use anyhow::Result;
use range_search::{search, AlphaRange, DenseRange, GappedRange};

fn main() -> Result<()> {
    // Dense range, eagerly materialized. Ten million entries, so this is
    // the O(n)-memory path on purpose.
    let dense = DenseRange::try_new(1i32, 9_999_990)?;
    let haystack = dense.to_vec();
    println!("dense range {dense}: {} values", haystack.len());
    println!("******** Searching dense range ********");
    for needle in [1, 9] {
        let found = search::binary_recursive(&needle, &haystack);
        println!("{needle} -> {found:?}");
    }

    // Gapped "blotchy" range: the needles may or may not be present.
    let blotchy: Vec<i64> = GappedRange::new(10).collect();
    println!();
    println!("gapped range: {blotchy:?}");
    println!("******** Searching gapped range ********");
    for needle in [25, 16, 44] {
        let found = search::binary(&needle, &blotchy);
        println!("{needle} -> {found:?}");
    }

    // Alphabetic range, inclusive of both endpoints.
    let alpha = AlphaRange::try_new('b', 'x')?;
    let letters = alpha.to_vec();
    println!();
    println!("alphabetic range {alpha}: {letters:?}");
    println!("******** Searching alphabetic range ********");
    for needle in ['e', 'z'] {
        let found = search::binary_recursive(&needle, &letters);
        println!("{needle} -> {found:?}");
    }

    Ok(())
}
