use crate::core::sampler::UniqueSampleGenerator;
use crate::domain::model::{GameRequest, NumberSet, ResultCollection};
use crate::domain::ports::{RandomSource, ResultSink};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Runs one [`GameRequest`]: one draw per game, each handed to a sink as soon as it exists.
pub struct DrawEngine<R: RandomSource> {
    generator: UniqueSampleGenerator<R>,
}

impl<R: RandomSource> DrawEngine<R> {
    pub fn new(rng: R) -> Self {
        Self {
            generator: UniqueSampleGenerator::new(rng),
        }
    }

    pub fn run<S: ResultSink + ?Sized>(
        &mut self,
        request: &GameRequest,
        sink: &mut S,
    ) -> Result<u32> {
        request.validate()?;

        tracing::info!(
            "Drawing {} game(s) of {} number(s) from 1-{}",
            request.games,
            request.numbers_per_game,
            request.pool_size
        );
        if request.games == 0 {
            tracing::warn!("Zero games requested, nothing will be drawn");
        }

        sink.begin(request)?;
        for game_number in 1..=request.games {
            let numbers = self
                .generator
                .generate(request.pool_size, request.numbers_per_game)?;
            tracing::debug!("Game {} drawn: {}", game_number, numbers);
            sink.game(game_number, &numbers)?;
        }
        sink.finish()?;

        tracing::info!("Finished drawing {} game(s)", request.games);
        Ok(request.games)
    }

    pub fn generate(&mut self, request: &GameRequest) -> Result<ResultCollection> {
        let mut collection = ResultCollection::new(*request);
        self.run(request, &mut collection)?;
        Ok(collection)
    }
}

impl ResultSink for ResultCollection {
    fn begin(&mut self, request: &GameRequest) -> Result<()> {
        self.request = *request;
        self.games.clear();
        Ok(())
    }

    fn game(&mut self, _game_number: u32, numbers: &NumberSet) -> Result<()> {
        self.games.push(numbers.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
