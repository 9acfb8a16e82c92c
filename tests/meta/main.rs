//! Repository layout checks for the mirrored unit test tree
