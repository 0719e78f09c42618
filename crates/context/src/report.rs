//! Human-readable rendering of the addon context.
//!
//! Responsibilities:
//! - Write a deterministic, labeled report of the loaded context to any
//!   `io::Write` (the binary passes stderr).
//!
//! Does NOT handle:
//! - The stdout instruction object (owned by the binary).
//!
//! Invariants:
//! - The section and line order is fixed; every labeled line appears on
//!   every run, so log consumers can rely on line presence.
//! - Absent values render as `(not available)`, never as a missing line.
//! - The DSC session token never appears; only the `***` marker does.
//! - Rendering cannot fail for any combination of present/absent fields
//!   (only writer I/O errors propagate).

use std::io::{self, Write};

use crate::context::{AddonContext, UserInput};
use crate::item::FileMeta;

const NOT_AVAILABLE: &str = "(not available)";

fn or_absent(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_AVAILABLE)
}

/// Write the full context report.
pub fn write_report<W: Write>(out: &mut W, ctx: &AddonContext) -> io::Result<()> {
    writeln!(out, "=== Docspell addon context ===")?;
    match &ctx.user_input_file {
        Some(path) => writeln!(out, "User input file: {}", path.display())?,
        None => writeln!(out, "User input file: {NOT_AVAILABLE}")?,
    }
    match &ctx.user_input {
        UserInput::Json(value) => writeln!(out, "User input: {value}")?,
        UserInput::RawText(text) => writeln!(out, "User input: {text}")?,
        UserInput::Absent => writeln!(out, "User input: {NOT_AVAILABLE}")?,
    }

    writeln!(out, "\n--- Basic environment ---")?;
    writeln!(out, "ADDON_DIR: {}", or_absent(&ctx.addon_dir))?;
    writeln!(out, "TMP_DIR: {}", or_absent(&ctx.tmp_dir))?;
    writeln!(out, "OUTPUT_DIR: {}", or_absent(&ctx.output_dir))?;
    writeln!(out, "CACHE_DIR: {}", or_absent(&ctx.cache_dir))?;

    writeln!(out, "\n--- Item context ---")?;
    writeln!(out, "ITEM_DIR: {}", or_absent(&ctx.item_dir))?;
    match &ctx.item_data {
        Some(item) => {
            writeln!(
                out,
                "Item: id={}, name={}, collective={}",
                item.id.as_deref().unwrap_or(NOT_AVAILABLE),
                item.name.as_deref().unwrap_or(NOT_AVAILABLE),
                item.collective
                    .as_ref()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            )?;
            writeln!(out, "  tags: {:?}", item.tags)?;
            writeln!(out, "  assumedTags: {:?}", item.assumed_tags)?;
            writeln!(out, "  attachments: {}", item.attachments.len())?;
            // Assumed relations are summarized by name, only when present.
            let relations = [
                ("assumedCorrOrg", &item.assumed_corr_org),
                ("assumedCorrPerson", &item.assumed_corr_person),
                ("assumedConcPerson", &item.assumed_conc_person),
                ("assumedConcEquip", &item.assumed_conc_equip),
            ];
            for (label, entity) in relations {
                if let Some(entity) = entity {
                    writeln!(
                        out,
                        "  {label}: {}",
                        entity.name.as_deref().unwrap_or(NOT_AVAILABLE)
                    )?;
                }
            }
        }
        None => writeln!(out, "Item data: {NOT_AVAILABLE}")?,
    }
    match &ctx.item_args {
        Some(args) => {
            let pretty = serde_json::to_string_pretty(args).map_err(io::Error::other)?;
            writeln!(out, "Item args (upload): {pretty}")?;
        }
        None => writeln!(out, "Item args (upload): {NOT_AVAILABLE}")?,
    }
    // An absent file list means the same as an empty one: no files.
    write_file_list(out, "ITEM_ORIGINAL_JSON", ctx.item_original.as_deref())?;
    write_file_list(out, "ITEM_PDF_JSON", ctx.item_pdf.as_deref())?;
    writeln!(out, "ITEM_ORIGINAL_DIR: {}", or_absent(&ctx.item_original_dir))?;
    writeln!(out, "ITEM_PDF_DIR: {}", or_absent(&ctx.item_pdf_dir))?;

    writeln!(out, "\n--- dsc session (when configured) ---")?;
    writeln!(out, "DSC_DOCSPELL_URL: {}", or_absent(&ctx.docspell_url))?;
    match &ctx.session {
        Some(redacted) => writeln!(out, "DSC_SESSION: {redacted}")?,
        None => writeln!(out, "DSC_SESSION: {NOT_AVAILABLE}")?,
    }

    Ok(())
}

fn write_file_list<W: Write>(
    out: &mut W,
    label: &str,
    files: Option<&[FileMeta]>,
) -> io::Result<()> {
    let files = files.unwrap_or_default();
    writeln!(out, "{label}: {} files", files.len())?;
    for file in files {
        writeln!(
            out,
            "  - {} (id={}, mimetype={})",
            file.name.as_deref().unwrap_or(NOT_AVAILABLE),
            file.id.as_deref().unwrap_or(NOT_AVAILABLE),
            file.mimetype.as_deref().unwrap_or(NOT_AVAILABLE),
        )?;
    }
    Ok(())
}
