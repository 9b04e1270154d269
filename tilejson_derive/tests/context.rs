use anyhow::{Result, bail, ensure};
use pretty_assertions::assert_eq;
use tilejson_derive::context;

#[context("Failed to parse zoom from {text:?}")]
fn parse_zoom(text: &str) -> Result<u8> {
	let zoom: u8 = text.parse()?;
	ensure!(zoom <= 30, "zoom {zoom} is above 30");
	Ok(zoom)
}

#[context("Failed to read layer {}", index)]
fn layer_name(names: &[&str], index: usize) -> Result<String> {
	match names.get(index) {
		Some(name) => Ok((*name).to_owned()),
		None => bail!("only {} layers", names.len()),
	}
}

#[context("early return")]
fn early_return(flag: bool) -> Result<u8> {
	if flag {
		return Ok(1);
	}
	bail!("flag not set")
}

#[test]
fn success_passes_through() -> Result<()> {
	assert_eq!(parse_zoom("14")?, 14);
	assert_eq!(layer_name(&["roads"], 0)?, "roads");
	assert_eq!(early_return(true)?, 1);
	Ok(())
}

#[test]
fn error_gets_context() {
	let err = parse_zoom("31").unwrap_err();
	assert_eq!(format!("{err:#}"), r#"Failed to parse zoom from "31": zoom 31 is above 30"#);

	let err = layer_name(&["roads"], 3).unwrap_err();
	assert_eq!(format!("{err:#}"), "Failed to read layer 3: only 1 layers");

	assert_eq!(early_return(false).unwrap_err().to_string(), "early return");
}
