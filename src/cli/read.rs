use std::io::{BufRead, BufReader};

/// Reads a problem file into sets of formula strings.
///
/// One formula per line; a blank line closes the current set; `#` begins a comment line.
pub fn read_sets(path: &str) -> Result<Vec<Vec<String>>, std::io::Error> {
    let file = std::fs::File::open(path)?;
    let reader = BufReader::new(file);

    let mut sets = Vec::default();
    let mut current: Vec<String> = Vec::default();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.starts_with('#') {
            continue;
        }

        if line.is_empty() {
            if !current.is_empty() {
                sets.push(std::mem::take(&mut current));
            }
            continue;
        }

        current.push(line.to_string());
    }

    if !current.is_empty() {
        sets.push(current);
    }

    Ok(sets)
}
