//! Procedural macros for the elven-solver library

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive macro for automatically registering solvers with the plugin system
///
/// Generates an `inventory::submit!` of a `SolverPlugin` for the annotated
/// type, so it is discovered when a registry calls `register_all_plugins`.
///
/// # Attributes
///
/// - `year`: Required. The Advent of Code year (e.g., 2023)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["2023", "grid"])
///
/// # Requirements
///
/// The type must implement the `Solver` trait. If the trait is not
/// implemented, the generated trait bound check produces a clear
/// compile-time error pointing at the type.
///
/// # Example
///
/// ```ignore
/// use elven_solver::{AocParser, AutoRegisterSolver, ParseError, SolveError, Solver};
///
/// #[derive(AutoRegisterSolver)]
/// #[aoc(year = 2023, day = 1, tags = ["2023"])]
/// struct Day01;
///
/// impl AocParser for Day01 {
///     // ... implementation
/// }
///
/// impl Solver for Day01 {
///     // ... implementation
/// }
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let aoc_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc"))
        .expect("AutoRegisterSolver derive macro requires #[aoc(...)] attribute");

    // Types match SolverPlugin fields so the emitted literals are well-typed.
    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    aoc_attr
        .parse_nested_meta(|meta| {
            if meta.path.is_ident("year") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Int(lit_int) = value {
                    year = Some(lit_int.base10_parse()?);
                }
            } else if meta.path.is_ident("day") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Int(lit_int) = value {
                    day = Some(lit_int.base10_parse()?);
                }
            } else if meta.path.is_ident("tags") {
                // Parse array of string literals: tags = ["a", "b"]
                let _ = meta.value()?;
                let content;
                syn::bracketed!(content in meta.input);
                while !content.is_empty() {
                    let lit: Lit = content.parse()?;
                    if let Lit::Str(lit_str) = lit {
                        tags.push(lit_str.value());
                    }
                    if content.peek(syn::Token![,]) {
                        let _: syn::Token![,] = content.parse()?;
                    }
                }
            }
            Ok(())
        })
        .expect("Failed to parse #[aoc(...)] attribute");

    let year = year.expect("Missing required 'year' attribute");
    let day = day.expect("Missing required 'day' attribute");

    let tags_array = if tags.is_empty() {
        quote! { &[] }
    } else {
        let tag_strs = tags.iter().map(|s| s.as_str());
        quote! { &[#(#tag_strs),*] }
    };

    let expanded = quote! {
        // Compile-time check that the type implements the Solver trait
        const _: () = {
            trait MustImplementSolver: ::elven_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::elven_solver::inventory::submit! {
            ::elven_solver::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: #tags_array,
            }
        }
    };

    TokenStream::from(expanded)
}
