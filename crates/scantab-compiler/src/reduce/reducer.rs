use scantab_core::TransitionMatrix;

/// Result of reducing one matrix dimension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reduction {
    /// Original index to reduced index.
    pub map: Vec<usize>,
    /// `killed[i]` when index `i` duplicates an earlier one.
    pub killed: Vec<bool>,
    /// Number of surviving indices.
    pub len: usize,
}

impl Reduction {
    /// Every index survives.
    pub fn identity(len: usize) -> Self {
        Self {
            map: (0..len).collect(),
            killed: vec![false; len],
            len,
        }
    }

    /// Number of indices before reduction.
    pub fn original_len(&self) -> usize {
        self.map.len()
    }

    /// Surviving original indices, ascending.
    pub fn survivors(&self) -> impl Iterator<Item = usize> + '_ {
        self.killed
            .iter()
            .enumerate()
            .filter(|&(_, killed)| !killed)
            .map(|(i, _)| i)
    }

    /// Build a map where each index collapses onto the first earlier
    /// survivor for which `equal` holds.
    fn build(len: usize, mut equal: impl FnMut(usize, usize) -> bool) -> Self {
        let mut map = Vec::with_capacity(len);
        let mut killed = vec![false; len];
        let mut survivors: Vec<usize> = Vec::new();

        for i in 0..len {
            match survivors.iter().find(|&&j| equal(i, j)) {
                Some(&j) => {
                    killed[i] = true;
                    map.push(map[j]);
                }
                None => {
                    map.push(survivors.len());
                    survivors.push(i);
                }
            }
        }

        Self {
            map,
            killed,
            len: survivors.len(),
        }
    }
}

/// Collapse columns equal (across all states) to an earlier column.
///
/// A matrix with no states or no classes is already reduced.
pub fn reduce_columns(matrix: &TransitionMatrix) -> Reduction {
    let num_classes = matrix.num_classes();
    if matrix.is_empty() {
        return Reduction::identity(num_classes);
    }

    let num_states = matrix.num_states();
    let columns = Reduction::build(num_classes, |i, j| {
        (0..num_states).all(|k| matrix.get(k, i) == matrix.get(k, j))
    });
    log::debug!("columns: {num_classes} -> {}", columns.len);
    columns
}

/// Collapse rows equal (on surviving columns) to an earlier row.
pub fn reduce_rows(matrix: &TransitionMatrix, columns: &Reduction) -> Reduction {
    let num_states = matrix.num_states();
    if matrix.is_empty() {
        return Reduction::identity(num_states);
    }

    let live: Vec<usize> = columns.survivors().collect();
    let rows = Reduction::build(num_states, |i, j| {
        live.iter().all(|&c| matrix.get(i, c) == matrix.get(j, c))
    });
    log::debug!("rows: {num_states} -> {}", rows.len);
    rows
}

/// Physical reduced matrix: surviving rows by surviving columns.
pub fn compact(
    matrix: &TransitionMatrix,
    rows: &Reduction,
    columns: &Reduction,
) -> TransitionMatrix {
    let live_rows: Vec<usize> = rows.survivors().collect();
    let live_cols: Vec<usize> = columns.survivors().collect();
    TransitionMatrix::from_fn(live_rows.len(), live_cols.len(), |r, c| {
        matrix.get(live_rows[r], live_cols[c])
    })
}

