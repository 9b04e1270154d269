use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::{self, Parse, ParseStream};
use syn::{LitStr, Token};

/// Arguments of `#[context("format", args...)]`.
///
/// The first token must be a string literal; everything after the first comma is
/// passed through to `format!` unchanged.
#[derive(Debug)]
pub struct ContextArgs {
	pub message: LitStr,
	pub rest: Option<TokenStream2>,
}

impl ContextArgs {
	/// Tokens suitable for `format!(...)`.
	pub fn format_args(&self) -> TokenStream2 {
		let message = &self.message;
		match &self.rest {
			Some(rest) => quote! { #message, #rest },
			None => quote! { #message },
		}
	}
}

impl Parse for ContextArgs {
	fn parse(input: ParseStream<'_>) -> parse::Result<Self> {
		let message: LitStr = input.parse()?;
		if input.is_empty() {
			return Ok(Self { message, rest: None });
		}
		input.parse::<Token![,]>()?;
		let rest: TokenStream2 = input.parse()?;
		Ok(Self {
			message,
			rest: (!rest.is_empty()).then_some(rest),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::ContextArgs;
	use pretty_assertions::assert_eq;
	use syn::parse_str;

	#[test]
	fn parses_plain_message() {
		let args: ContextArgs = parse_str(r#""decoding bounds""#).expect("plain message");
		assert_eq!(args.message.value(), "decoding bounds");
		assert!(args.rest.is_none());
		assert_eq!(args.format_args().to_string(), r#""decoding bounds""#);
	}

	#[test]
	fn parses_message_with_arguments() {
		let args: ContextArgs = parse_str(r#""layer {} of {}", index, total"#).expect("message with args");
		assert_eq!(args.message.value(), "layer {} of {}");
		assert_eq!(args.rest.unwrap().to_string(), "index , total");
	}

	#[test]
	fn tolerates_trailing_comma() {
		let args: ContextArgs = parse_str(r#""center {input:?}","#).expect("trailing comma");
		assert!(args.rest.is_none());
	}

	#[test]
	fn rejects_missing_literal() {
		let err = parse_str::<ContextArgs>("input").unwrap_err();
		assert!(err.to_string().contains("string literal"), "unexpected error: {err}");
	}

	#[test]
	fn rejects_missing_comma() {
		assert!(parse_str::<ContextArgs>(r#""a" b"#).is_err());
	}
}
