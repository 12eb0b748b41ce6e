use super::*;

impl<T> AdaptiveCholesky<T>
where
    T: FloatT,
{
    /// Updates the factor after one adaptivity step of the grid.
    ///
    /// `deleted` lists the positions, relative to the ordering before the
    /// step and in strictly ascending order, of the points that were
    /// removed.  `new_points` is the number of points appended at the end
    /// of the grid.  `grid` must already reflect the step, i.e. hold the
    /// retained points in their previous relative order followed by the new
    /// ones, and `λ` is the regularization on the new diagonal entries.
    ///
    /// On success the factor equals the Cholesky factor of the system
    /// matrix of `grid`.  A failure after the factor was modified leaves it
    /// unusable until a new system matrix is set.
    pub fn apply_adaptivity_step<G>(
        &mut self,
        grid: &G,
        deleted: &[usize],
        new_points: usize,
        λ: T,
    ) -> Result<(), CholeskyError>
    where
        G: OverlapProvider<T> + ?Sized,
    {
        self.check_decomposed("adaptivity step before decompose")?;

        let old_size = self.lhs.nrows();
        check_deleted_points(deleted, old_size)?;
        let expected = old_size - deleted.len() + new_points;
        if grid.size() != expected {
            return Err(CholeskyError::IncompatibleDimension {
                expected,
                found: grid.size(),
            });
        }

        let result;
        timeit! {self.timers => "adaptivity_step"; {
            result = self.coarsen_and_refine(grid, deleted, new_points, λ);
        }}
        if let Err(e) = result {
            self.invalidate();
            return Err(e);
        }

        if self.settings.verbose {
            log::info!(
                "adaptivity step: {} -> {} points ({} removed, {} added)",
                old_size,
                self.size(),
                deleted.len(),
                new_points
            );
            self.timers.log();
        }
        Ok(())
    }

    fn coarsen_and_refine<G>(
        &mut self,
        grid: &G,
        deleted: &[usize],
        new_points: usize,
        λ: T,
    ) -> Result<(), CholeskyError>
    where
        G: OverlapProvider<T> + ?Sized,
    {
        if !deleted.is_empty() {
            let result;
            timeit! {self.timers => "coarsening"; {
                result = self.coarsen(deleted);
            }}
            result?;
        }
        if new_points > 0 {
            let result;
            timeit! {self.timers => "refinement"; {
                result = self.refine(grid, new_points, λ);
            }}
            result?;
        }
        Ok(())
    }

    // Removes the points in `deleted` from the factor.  Points close to the
    // end are rotated to the back and truncated.  All others are rotated to
    // the front, after which the trailing block is repaired with one rank
    // one update per removed point.
    fn coarsen(&mut self, deleted: &[usize]) -> Result<(), CholeskyError> {
        let old_size = self.lhs.nrows();
        let old_size_t: T = old_size.as_T();
        let threshold = old_size_t * self.settings.coarsening_threshold;

        let mut leading = 0;
        let mut trailing = 0;

        for &idx in deleted.iter().rev() {
            // 1-based position in the current ordering
            let p = idx + 1 + leading;
            let p_t: T = p.as_T();

            if leading == 0 && p_t > threshold {
                self.permute(p - 1, old_size - trailing - 1, CircularShift::Left)?;
                trailing += 1;
            } else {
                if leading == 0 {
                    self.lhs.resize_square(old_size - trailing);
                }
                self.permute(leading, p - 1, CircularShift::Right)?;
                leading += 1;
            }
        }

        if leading == 0 {
            self.lhs.resize_square(old_size - trailing);
        } else {
            let m = self.lhs.nrows();
            let updates = self.lhs.submatrix(leading..m, 0..leading);
            self.lhs.resize_to_submatrix(leading..m, leading..m);
            let mut x = vec![T::zero(); m - leading];
            for j in 0..leading {
                x.copy_from(updates.col_slice(j));
                rank_one_update(&mut self.lhs, &mut x)?;
            }
        }

        log::debug!(
            "coarsening: {} points moved to the back, {} to the front",
            trailing,
            leading
        );
        Ok(())
    }

    // Appends the last `new_points` points of `grid` one at a time
    fn refine<G>(&mut self, grid: &G, new_points: usize, λ: T) -> Result<(), CholeskyError>
    where
        G: OverlapProvider<T> + ?Sized,
    {
        let grid_size = grid.size();
        let cols = grid.overlap_columns(new_points, λ);
        if cols.size() != (grid_size, new_points) {
            return Err(CholeskyError::IncompatibleDimension {
                expected: new_points,
                found: cols.ncols(),
            });
        }

        self.lhs.resize_square(grid_size);
        let first = grid_size - new_points;
        for jj in 0..new_points {
            let j = first + jj;
            self.insert_point(&cols.col_slice(jj)[..=j], j)?;
        }

        log::debug!("refinement: {} points appended", new_points);
        Ok(())
    }
}

fn check_deleted_points(deleted: &[usize], n: usize) -> Result<(), CholeskyError> {
    for pair in deleted.windows(2) {
        if pair[0] >= pair[1] {
            return Err(CholeskyError::InvalidRange {
                k: pair[0],
                l: pair[1],
                n,
            });
        }
    }
    match deleted.last() {
        Some(&last) if last >= n => Err(CholeskyError::InvalidRange {
            k: last,
            l: last,
            n,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // a grid backed by an explicit system matrix, holding a subset of
    // its points in a given order
    struct DenseGrid {
        A: Matrix<f64>,
        points: Vec<usize>,
    }

    impl OverlapProvider<f64> for DenseGrid {
        fn size(&self) -> usize {
            self.points.len()
        }
        fn overlap_columns(&self, new_points: usize, λ: f64) -> Matrix<f64> {
            let n = self.points.len();
            let mut cols = Matrix::zeros((n, new_points));
            for jj in 0..new_points {
                let j = n - new_points + jj;
                for i in 0..n {
                    cols[(i, jj)] = self.A[(self.points[i], self.points[j])];
                }
                cols[(j, jj)] += λ;
            }
            cols
        }
    }

    fn test_matrix(n: usize) -> Matrix<f64> {
        // diagonally dominant, hence SPD
        let mut A = Matrix::zeros((n, n));
        for i in 0..n {
            for j in 0..n {
                A[(i, j)] = 1. / (1. + (i as f64 - j as f64).abs());
            }
            A[(i, i)] = n as f64;
        }
        A
    }

    fn factor_of(grid: &DenseGrid) -> Matrix<f64> {
        let mut chol = AdaptiveCholesky::new(CholeskySettings::default()).unwrap();
        chol.build_matrix(grid, 0.0).unwrap();
        chol.decompose().unwrap();
        chol.factor().clone()
    }

    fn check_step(threshold: f64, deleted: &[usize], new_points: usize) {
        let n0 = 10;
        let A = test_matrix(n0 + new_points);
        let mut grid = DenseGrid {
            A,
            points: (0..n0).collect(),
        };

        let settings = CholeskySettingsBuilder::default()
            .coarsening_threshold(threshold)
            .build()
            .unwrap();
        let mut chol = AdaptiveCholesky::new(settings).unwrap();
        chol.build_matrix(&grid, 0.0).unwrap();
        chol.decompose().unwrap();

        grid.points.retain(|p| !deleted.contains(p));
        grid.points.extend(n0..(n0 + new_points));
        chol.apply_adaptivity_step(&grid, deleted, new_points, 0.0)
            .unwrap();

        let L = factor_of(&grid);
        assert_eq!(chol.size(), grid.points.len());
        assert!(chol.factor().is_tril());
        assert!(chol.factor().data().norm_inf_diff(L.data()) < 1e-12);
    }

    #[test]
    fn test_coarsening_only() {
        // all to the back, all to the front, and a mix
        check_step(0.0, &[1, 4, 9], 0);
        check_step(1.0, &[1, 4, 9], 0);
        check_step(0.35, &[0, 2, 5, 8], 0);
    }

    #[test]
    fn test_refinement_only() {
        check_step(0.1, &[], 3);
    }

    #[test]
    fn test_coarsening_and_refinement() {
        check_step(0.1, &[0, 3, 7], 2);
        check_step(0.5, &[2, 3, 4, 5, 6], 4);
        check_step(1.0, &[9], 1);
    }

    #[test]
    fn test_step_timers() {
        let A = test_matrix(4);
        let mut grid = DenseGrid {
            A,
            points: vec![0, 1, 2],
        };
        let mut chol = AdaptiveCholesky::new(CholeskySettings::default()).unwrap();
        chol.build_matrix(&grid, 0.0).unwrap();
        chol.decompose().unwrap();

        grid.points = vec![0, 2, 3];
        chol.apply_adaptivity_step(&grid, &[1], 1, 0.0).unwrap();

        let timers = chol.timers();
        assert!(timers.elapsed("adaptivity_step").is_some());
        assert!(timers.elapsed_child("adaptivity_step", "coarsening").is_some());
        assert!(timers.elapsed_child("adaptivity_step", "refinement").is_some());
    }

    #[test]
    fn test_step_invalid_input() {
        let grid = DenseGrid {
            A: test_matrix(5),
            points: (0..5).collect(),
        };
        let mut chol = AdaptiveCholesky::new(CholeskySettings::default()).unwrap();
        chol.build_matrix(&grid, 0.0).unwrap();
        assert!(matches!(
            chol.apply_adaptivity_step(&grid, &[], 0, 0.0),
            Err(CholeskyError::ConstructionOrder(_))
        ));
        chol.decompose().unwrap();

        // not ascending
        assert!(matches!(
            chol.apply_adaptivity_step(&grid, &[3, 1], 2, 0.0),
            Err(CholeskyError::InvalidRange { .. })
        ));
        // repeated
        assert!(matches!(
            chol.apply_adaptivity_step(&grid, &[1, 1], 2, 0.0),
            Err(CholeskyError::InvalidRange { .. })
        ));
        // out of bounds
        assert!(matches!(
            chol.apply_adaptivity_step(&grid, &[5], 1, 0.0),
            Err(CholeskyError::InvalidRange { .. })
        ));
        // grid size does not match
        assert!(matches!(
            chol.apply_adaptivity_step(&grid, &[0], 0, 0.0),
            Err(CholeskyError::IncompatibleDimension { .. })
        ));

        // failed checks leave the factor intact
        assert_eq!(chol.size(), 5);
        assert!(chol.factor().data().norm_inf_diff(factor_of(&grid).data()) < 1e-14);
    }
}
