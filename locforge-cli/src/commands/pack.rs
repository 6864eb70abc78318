use std::path::Path;

use locforge::pak::{PackOptions, pack_directory};

pub fn execute(
    input: &Path,
    output: &Path,
    mount_point: Option<&str>,
    packer: &Path,
) -> anyhow::Result<()> {
    println!("Packing {input:?} into {output:?}");

    let options = PackOptions {
        packer: Some(packer.to_path_buf()),
        mount_point: mount_point.map(str::to_string),
    };
    pack_directory(input, output, &options)?;

    println!("✓ Pak created");
    Ok(())
}
