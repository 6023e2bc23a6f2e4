use anyhow::{Context, Result};
use fatnum::codec::chunk_to_hex;
use fatnum::{FatNum, Sign};

/// Print the chunk-level layout of one value.
pub fn inspect(value: &str, chunk_width: Option<u32>) -> Result<()> {
    let n = match chunk_width {
        Some(width) => FatNum::from_decimal_str_with_width(value, width),
        None => FatNum::from_decimal_str(value),
    }
    .with_context(|| format!("cannot parse {value:?}"))?;

    let sign = match n.sign() {
        Sign::Positive => "positive",
        Sign::Negative => "negative",
    };
    let groups: Vec<String> = n
        .chunks()
        .iter()
        .map(|&c| chunk_to_hex(c, n.chunk_width()))
        .collect();

    println!("value:       {n}");
    println!("sign:        {sign}");
    println!("chunk width: {}", n.chunk_width());
    println!("chunk count: {}", n.chunk_count());
    println!("chunks:      {}", groups.join(" "));
    Ok(())
}
