//! Startup banner and interactive algorithm prompt.

use std::io::{self, BufRead, Write};

use pathviz_paths::SearchKind;

const BANNER: &str = "\
pathviz: watch shortest-path searches explore a grid
----------------------------------------------------
Click two cells to set the start and the end, draw barriers with the left
button, then press Enter to run the search.";

/// Print the banner, read a selection from `input` and explain the chosen
/// algorithm. Returns once the user presses Enter.
///
/// Anything other than `a*` or `bfs` selects Dijkstra, as does end of input.
pub fn prompt_algorithm<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> io::Result<SearchKind> {
    writeln!(out, "{BANNER}")?;
    write!(out, "Please input a*, bfs or dijkstra: ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let kind = SearchKind::from_selection(&line);

    writeln!(out)?;
    writeln!(out, "{}", kind.description())?;
    writeln!(out)?;
    write!(out, "Press Enter to open the visualizer.")?;
    out.flush()?;
    line.clear();
    input.read_line(&mut line)?;
    Ok(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(input: &str) -> (SearchKind, String) {
        let mut out = Vec::new();
        let kind = prompt_algorithm(&mut input.as_bytes(), &mut out).unwrap();
        (kind, String::from_utf8(out).unwrap())
    }

    #[test]
    fn picks_the_typed_algorithm() {
        let (kind, text) = prompt("bfs\n\n");
        assert_eq!(kind, SearchKind::Bfs);
        assert!(text.contains(SearchKind::Bfs.description()));
        assert!(text.ends_with("Press Enter to open the visualizer."));

        assert_eq!(prompt("a*\n\n").0, SearchKind::AStar);
    }

    #[test]
    fn unknown_or_missing_input_means_dijkstra() {
        assert_eq!(prompt("greedy\n\n").0, SearchKind::Dijkstra);
        let (kind, text) = prompt("");
        assert_eq!(kind, SearchKind::Dijkstra);
        assert!(text.starts_with("pathviz:"));
    }
}
