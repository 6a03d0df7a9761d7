//! Interactive category menu.
//!
//! The loop reads from a `BufRead` and writes to separate output and
//! error sinks, so tests can drive whole sessions through in-memory
//! buffers.

use std::io::{self, BufRead, Write};

use uf_core::{Category, ConversionEntry, conversions_in, convert};

/// Run the menu loop until Exit is chosen or the input ends.
///
/// No conversion failure terminates the loop; errors are reported on
/// `err` and the menu is shown again.
pub fn run(input: &mut impl BufRead, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
    loop {
        write!(
            out,
            "\nUnit Converter\n\
             1. Convert Temperature\n\
             2. Convert Distance\n\
             3. Convert Weight\n\
             4. Convert Volume\n\
             5. Exit\n\
             Choose an option: "
        )?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            // End of input counts as Exit.
            writeln!(out, "Exiting...")?;
            return Ok(());
        };

        match line.trim().parse::<i64>() {
            Ok(choice @ 1..=4) => {
                convert_in_category(Category::ALL[(choice - 1) as usize], input, out, err)?;
            }
            Ok(5) => {
                writeln!(out, "Exiting...")?;
                return Ok(());
            }
            Ok(_) => writeln!(err, "Invalid option. Please try again.")?,
            Err(_) => writeln!(
                err,
                "Invalid input. Please enter a number corresponding to the menu option."
            )?,
        }
    }
}

/// One pass through a category: prompt for a value, list the category's
/// conversions, run the selected one.
fn convert_in_category(
    category: Category,
    input: &mut impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    write!(out, "Enter {} value: ", category.label().to_lowercase())?;
    out.flush()?;
    let Some(line) = read_line(input)? else {
        return Ok(());
    };
    let Ok(value) = line.trim().parse::<f64>() else {
        writeln!(err, "Invalid input. Please enter a numeric value.")?;
        return Ok(());
    };

    let entries: Vec<&ConversionEntry> = conversions_in(category).collect();
    writeln!(out, "Choose conversion type:")?;
    for (i, entry) in entries.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, entry.name)?;
    }
    write!(out, "Enter choice: ")?;
    out.flush()?;
    let Some(line) = read_line(input)? else {
        return Ok(());
    };
    let selected = line
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|choice| choice.checked_sub(1))
        .and_then(|index| entries.get(index).copied());
    let Some(entry) = selected else {
        writeln!(err, "Invalid conversion selection.")?;
        return Ok(());
    };

    tracing::debug!(name = entry.name, value, "running conversion");
    match convert(entry.name, value) {
        Ok(result) => writeln!(out, "Converted value: {:.2}", result)?,
        Err(convert_err) => writeln!(err, "Error: {}", convert_err)?,
    }
    Ok(())
}

fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
