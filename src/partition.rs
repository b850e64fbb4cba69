use crate::error::Result;
use crate::run::Run;

/// Copy of `data` without the elements covered by `run`.
///
/// Everything outside the run keeps its relative order.
pub fn remove_run(data: &[i32], run: Run) -> Result<Vec<i32>> {
    run.check_bounds(data.len())?;

    let mut remainder = Vec::with_capacity(data.len() - run.len);
    remainder.extend_from_slice(&data[..run.start]);
    remainder.extend_from_slice(&data[run.end()..]);
    Ok(remainder)
}

/// Consume `data` and hand back `(run payload, remainder)`.
pub fn split_run(mut data: Vec<i32>, run: Run) -> Result<(Vec<i32>, Vec<i32>)> {
    run.check_bounds(data.len())?;

    let payload: Vec<i32> = data.drain(run.range()).collect();
    Ok((payload, data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SortError;
    use crate::run::find_longest_run;

    fn reinsert(remainder: &[i32], payload: &[i32], at: usize) -> Vec<i32> {
        let mut out = remainder[..at].to_vec();
        out.extend_from_slice(payload);
        out.extend_from_slice(&remainder[at..]);
        out
    }

    #[test]
    fn test_remove_run_at_start() {
        let data = [1, 2, 3, 0, 5];
        assert_eq!(remove_run(&data, Run::new(0, 3)).unwrap(), vec![0, 5]);
    }

    #[test]
    fn test_remove_run_in_middle() {
        let data = [9, 1, 2, 3, 0, 5];
        assert_eq!(remove_run(&data, Run::new(1, 3)).unwrap(), vec![9, 0, 5]);
    }

    #[test]
    fn test_remove_run_at_end() {
        let data = [9, 8, 1, 2];
        assert_eq!(remove_run(&data, Run::new(2, 2)).unwrap(), vec![9, 8]);
    }

    #[test]
    fn test_remove_whole_sequence() {
        let data = [1, 2, 3];
        assert!(remove_run(&data, Run::new(0, 3)).unwrap().is_empty());
    }

    #[test]
    fn test_remove_run_out_of_bounds() {
        let err = remove_run(&[1, 2], Run::new(1, 2)).unwrap_err();
        assert!(matches!(err, SortError::RunOutOfBounds { sequence_len: 2, .. }));
    }

    #[test]
    fn test_split_run_matches_remove_run() {
        let data = vec![3, 1, 4, 1, 5, 9, 2, 6];
        let run = find_longest_run(&data).unwrap();
        let expected_remainder = remove_run(&data, run).unwrap();
        let (payload, remainder) = split_run(data, run).unwrap();
        assert_eq!(payload, vec![1, 5, 9]);
        assert_eq!(remainder, expected_remainder);
        assert_eq!(remainder, vec![3, 1, 4, 2, 6]);
    }

    #[test]
    fn test_reinsert_round_trip() {
        let data = vec![4, 6, 1, 2, 3, 8, 0, 7];
        let run = find_longest_run(&data).unwrap();
        let payload = run.elements(&data).unwrap();
        let remainder = remove_run(&data, run).unwrap();
        assert_eq!(remainder.len() + payload.len(), data.len());
        assert_eq!(reinsert(&remainder, &payload, run.start), data);
    }
}
