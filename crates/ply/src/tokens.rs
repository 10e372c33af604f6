use std::str::FromStr;

use plyreader_mesh::{Face, Vector3};

use crate::error::{PlyError, PlyResult};

// Tokens are separated by a single space. Runs of spaces produce empty tokens which
// fail to parse, same as any other malformed value.
fn tokens(line: &str) -> std::str::Split<'_, char> {
    line.split(' ')
}

fn parse_triple<'a, T: FromStr>(tokens: &mut impl Iterator<Item = &'a str>) -> PlyResult<[T; 3]> {
    let mut next = || -> PlyResult<T> {
        tokens
            .next()
            .and_then(|t| t.parse().ok())
            .ok_or(PlyError::InvalidSequence)
    };
    Ok([next()?, next()?, next()?])
}

/// Parses a vertex record of the form `<x> <y> <z>`.
///
/// Anything after the third value is ignored.
pub fn parse_float_triple(line: &str) -> PlyResult<Vector3> {
    let [x, y, z] = parse_triple::<f32>(&mut tokens(line))?;
    Ok(Vector3::new(x, y, z))
}

/// Parses a face record of the form `<n> <i0> <i1> <i2>`.
///
/// The leading `n` is the number of indices in the face. Only triangles are supported
/// so it is skipped without being checked.
pub fn parse_indexed_uint_triple(line: &str) -> PlyResult<Face> {
    let mut tokens = tokens(line);
    let _vertex_count = tokens.next();
    Ok(Face::from(parse_triple::<u32>(&mut tokens)?))
}

/// Parses the count out of an `element <name> <count>` declaration.
pub fn parse_count(line: &str) -> PlyResult<usize> {
    tokens(line)
        .nth(2)
        .ok_or(PlyError::InvalidElement)?
        .parse()
        .map_err(|_| PlyError::InvalidElementCount)
}
