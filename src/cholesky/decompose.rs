use super::*;

impl<T> AdaptiveCholesky<T>
where
    T: FloatT,
{
    /// Computes the full factorization `A = LL^T` of the system matrix in
    /// place.  Calling it again on an already decomposed factor does nothing.
    pub fn decompose(&mut self) -> Result<(), CholeskyError> {
        if !self.is_constructed {
            return Err(CholeskyError::ConstructionOrder(
                "decompose called before the system matrix was set",
            ));
        }
        if self.is_decomposed {
            return Ok(());
        }

        let result;
        timeit! {self.timers => "decompose"; {
            result = self.engine.factor(&mut self.lhs);
        }}
        if let Err(e) = result {
            // lhs is partially overwritten
            self.invalidate();
            return Err(e.into());
        }

        self.is_decomposed = true;

        if self.settings.verbose {
            log::info!(
                "decomposed {} x {} system with the {} backend",
                self.size(),
                self.size(),
                self.engine.name()
            );
        }
        Ok(())
    }
}
