//! Procedural macros for the `tilejson` crate.

mod args;

use crate::args::ContextArgs;
use proc_macro::TokenStream;
use proc_macro2::{Ident, Span};
use quote::{ToTokens, quote};
use syn::{ReturnType, parse_macro_input};

/// Wraps the error of an `anyhow::Result`-returning function with a formatted message.
///
/// ```ignore
/// #[context("Failed to convert {input:?} to Bounds")]
/// fn try_from(input: Vec<f64>) -> anyhow::Result<Bounds> { ... }
/// ```
///
/// The format arguments may reference the function parameters, as long as the body only
/// borrows them. The body runs inside a closure, so `return` and `?` keep their meaning.
#[proc_macro_attribute]
pub fn context(args: TokenStream, input: TokenStream) -> TokenStream {
	let args = parse_macro_input!(args as ContextArgs);
	let mut function = parse_macro_input!(input as syn::ItemFn);

	if let Some(asyncness) = function.sig.asyncness {
		return syn::Error::new_spanned(asyncness, "#[context] does not support async functions")
			.to_compile_error()
			.into();
	}

	let return_type = match &function.sig.output {
		ReturnType::Default => {
			return syn::Error::new_spanned(&function.sig, "#[context] requires a function returning Result")
				.to_compile_error()
				.into();
		}
		ReturnType::Type(_, ty) => ty.clone(),
	};

	let body = &function.block;
	let format_args = args.format_args();
	let err = Ident::new("err", Span::mixed_site());
	let result = Ident::new("result", Span::mixed_site());

	let wrapped = quote! {
		let #result: #return_type = (|| -> #return_type #body)();
		#result.map_err(|#err| #err.context(format!(#format_args)))
	};
	function.block.stmts = vec![syn::Stmt::Expr(syn::Expr::Verbatim(wrapped), None)];

	function.into_token_stream().into()
}
