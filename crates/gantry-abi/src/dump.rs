//! Human-readable rendering of a decoded module.
//!
//! This is the reference consumer for the caller-side conventions the
//! decoders leave alone: 1-based name indices resolve against the symbol
//! table (0 renders as `_`, a dangling index as `?N`), and flag bytes are
//! spelled out bit by bit with unknown bits kept as hex.

use std::fmt::Write as _;

use crate::abi::Abi;
use crate::colors::Colors;
use crate::functions::FunctionFlags;
use crate::header::Header;
use crate::symbols::Symbols;
use crate::types::{TypeAttrFlags, TypeFlags};

/// Render the whole module, one section per block.
pub fn dump(abi: &Abi, colors: Colors) -> String {
    let mut out = String::new();
    dump_header(&mut out, &abi.header, &colors);
    dump_symbols(&mut out, &abi.symbols, &colors);
    dump_types(&mut out, abi, &colors);
    dump_functions(&mut out, abi, &colors);
    out
}

fn dump_header(out: &mut String, header: &Header, c: &Colors) {
    writeln!(out, "{}[header]{}", c.blue, c.reset).unwrap();
    writeln!(out, "major   {}", header.major).unwrap();
    writeln!(out, "magic   {:#06x}", header.magic).unwrap();
    writeln!(out, "version {}", header.version).unwrap();
    writeln!(out, "crc     {:#018x}", header.crc).unwrap();
    out.push('\n');
}

fn dump_symbols(out: &mut String, symbols: &Symbols, c: &Colors) {
    writeln!(
        out,
        "{}[symbols]{} count={} byte_size={}",
        c.blue,
        c.reset,
        symbols.count(),
        symbols.byte_size
    )
    .unwrap();
    let width = index_width(symbols.count());
    for (i, symbol) in symbols.symbols.iter().enumerate() {
        let text = symbol.display();
        writeln!(out, "S{:0width$} {}{:?}{}", i + 1, c.green, text, c.reset).unwrap();
    }
    out.push('\n');
}

fn dump_types(out: &mut String, abi: &Abi, c: &Colors) {
    let types = &abi.types;
    writeln!(
        out,
        "{}[types]{} count={} declared_attrs={}",
        c.blue,
        c.reset,
        types.count(),
        types.nb_attrs
    )
    .unwrap();
    let width = index_width(types.count().saturating_sub(1));
    for (i, ty) in types.types.iter().enumerate() {
        writeln!(
            out,
            "T{i:0width$} {}{}{} module={} lib={} super={} flags={}",
            c.green,
            symbol_or(&abi.symbols, ty.name),
            c.reset,
            symbol_or(&abi.symbols, ty.module),
            symbol_or(&abi.symbols, ty.lib),
            ty.super_type,
            spell_type_flags(ty.flags),
        )
        .unwrap();
        let attr_width = index_width(ty.attrs.len().saturating_sub(1));
        for (j, attr) in ty.attrs.iter().enumerate() {
            writeln!(
                out,
                "  {}A{j:0attr_width$} {} abi_type={} sbi={} precision={} flags={}{}",
                c.dim,
                symbol_or(&abi.symbols, attr.name),
                attr.abi_type,
                attr.sbi_type,
                attr.precision,
                spell_attr_flags(attr.flags),
                c.reset,
            )
            .unwrap();
        }
    }
    out.push('\n');
}

fn dump_functions(out: &mut String, abi: &Abi, c: &Colors) {
    let functions = &abi.functions;
    writeln!(
        out,
        "{}[functions]{} count={}",
        c.blue,
        c.reset,
        functions.count()
    )
    .unwrap();
    let width = index_width(functions.count().saturating_sub(1));
    for (i, function) in functions.functions.iter().enumerate() {
        let params: Vec<String> = function
            .params
            .iter()
            .map(|param| {
                let mark = if param.nullable != 0 { "?" } else { "" };
                format!("{}: {}{mark}", symbol_or(&abi.symbols, param.name), param.ty)
            })
            .collect();
        writeln!(
            out,
            "F{i:0width$} {}{}{}({}) -> {} module={} lib={} flags={}",
            c.green,
            symbol_or(&abi.symbols, function.name),
            c.reset,
            params.join(", "),
            function.return_type,
            symbol_or(&abi.symbols, function.module),
            symbol_or(&abi.symbols, function.lib),
            spell_function_flags(function.flags),
        )
        .unwrap();
    }
}

/// Digits needed to print indices up to `max_index`.
fn index_width(mut max_index: usize) -> usize {
    let mut width = 1;
    while max_index >= 10 {
        width += 1;
        max_index /= 10;
    }
    width
}

fn symbol_or(symbols: &Symbols, index: u32) -> String {
    match symbols.get(index) {
        Some(symbol) => symbol.display().into_owned(),
        None if index == 0 => "_".to_string(),
        None => format!("?{index}"),
    }
}

fn spell_bits(byte: u8, names: &[(u8, &str)]) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut rest = byte;
    for &(bit, name) in names {
        if byte & bit != 0 {
            parts.push(name.to_string());
            rest &= !bit;
        }
    }
    if rest != 0 {
        parts.push(format!("{rest:#04x}"));
    }
    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join("|")
    }
}

fn spell_type_flags(flags: TypeFlags) -> String {
    spell_bits(
        flags.0,
        &[
            (TypeFlags::NATIVE, "native"),
            (TypeFlags::ABSTRACT, "abstract"),
            (TypeFlags::ENUM, "enum"),
            (TypeFlags::MASKED, "masked"),
            (TypeFlags::AMBIGUOUS, "ambiguous"),
        ],
    )
}

fn spell_attr_flags(flags: TypeAttrFlags) -> String {
    spell_bits(
        flags.0,
        &[
            (TypeAttrFlags::NULLABLE, "nullable"),
            (TypeAttrFlags::MAPPED, "mapped"),
        ],
    )
}

fn spell_function_flags(flags: FunctionFlags) -> String {
    spell_bits(flags.0, &[(FunctionFlags::RETURN_NULLABLE, "return_nullable")])
}
