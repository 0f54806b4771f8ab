use std::io::Write;
use std::path::Path;
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::assembler::SentenceAssembler;
use crate::errors::GenerationError;
use crate::generators::{random_address, random_name};
use crate::model::{GenerateOptions, GenerationReport, validate_probability};
use crate::output::SentenceSink;
use crate::reference::{ReferenceData, ReferenceFetcher};

const PROGRESS_INTERVAL: u64 = 1000;

/// Produces one sentence per call from borrowed reference data.
#[derive(Debug, Clone)]
pub struct SentenceGenerator<'a> {
    references: &'a ReferenceData,
    assembler: &'a SentenceAssembler,
    p_pronoun: f64,
}

impl<'a> SentenceGenerator<'a> {
    pub fn new(
        references: &'a ReferenceData,
        assembler: &'a SentenceAssembler,
        p_pronoun: f64,
    ) -> Result<Self, GenerationError> {
        validate_probability("p_pronoun", p_pronoun)?;
        Ok(Self {
            references,
            assembler,
            p_pronoun,
        })
    }

    pub fn next_sentence(&self, rng: &mut dyn rand::RngCore) -> Result<String, GenerationError> {
        let name = random_name(
            &self.references.first_names,
            &self.references.last_names,
            self.p_pronoun,
            rng,
        )?;
        let address = random_address(&self.references.address, rng)?;
        Ok(self.assembler.assemble(&name, &address, rng))
    }

    /// Stream `count` sentences into `sink`, one per line.
    pub fn write_sentences<W: Write>(
        &self,
        count: u64,
        sink: &mut SentenceSink<W>,
        rng: &mut dyn rand::RngCore,
    ) -> Result<(), GenerationError> {
        for index in 0..count {
            let sentence = self.next_sentence(rng)?;
            sink.write_line(&sentence)?;
            let written = index + 1;
            if written % PROGRESS_INTERVAL == 0 {
                debug!(event = "progress", written, total = count);
            }
        }
        Ok(())
    }
}

/// Entry point for writing a batch of sentences.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

struct PreparedRun {
    run_id: String,
    start: Instant,
    report: GenerationReport,
    references: ReferenceData,
    assembler: SentenceAssembler,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Load references, then truncate `out_path` and stream
    /// `options.n_sentences` lines into it.
    ///
    /// Reference failures abort before the output file is touched.
    pub async fn run(
        &self,
        fetcher: &dyn ReferenceFetcher,
        out_path: &Path,
    ) -> Result<GenerationReport, GenerationError> {
        let prepared = self.prepare(fetcher, &out_path.display().to_string()).await?;
        let mut sink = SentenceSink::create(out_path)?;
        self.write_batch(prepared, &mut sink)
    }

    /// Same as [`GenerationEngine::run`] but streams into a caller-owned sink.
    ///
    /// The sink is flushed on every exit path, so lines written before a
    /// failure stay in the underlying writer.
    pub async fn run_into<W: Write>(
        &self,
        fetcher: &dyn ReferenceFetcher,
        sink: &mut SentenceSink<W>,
    ) -> Result<GenerationReport, GenerationError> {
        let prepared = self.prepare(fetcher, "<writer>").await?;
        self.write_batch(prepared, sink)
    }

    async fn prepare(
        &self,
        fetcher: &dyn ReferenceFetcher,
        target: &str,
    ) -> Result<PreparedRun, GenerationError> {
        self.options.validate()?;
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let mut report =
            GenerationReport::new(run_id.clone(), self.options.seed, self.options.n_sentences);

        info!(
            event = "generation_started",
            run_id = %run_id,
            sentences = self.options.n_sentences,
            seed = ?self.options.seed,
            out = %target
        );

        let references = ReferenceData::load(&self.options.references, fetcher).await?;
        report.references = references.summary();

        let assembler = SentenceAssembler::new(
            self.options.address_phrases.clone(),
            self.options.phone_phrases.clone(),
        )?;

        Ok(PreparedRun {
            run_id,
            start,
            report,
            references,
            assembler,
        })
    }

    fn write_batch<W: Write>(
        &self,
        prepared: PreparedRun,
        sink: &mut SentenceSink<W>,
    ) -> Result<GenerationReport, GenerationError> {
        let PreparedRun {
            run_id,
            start,
            mut report,
            references,
            assembler,
        } = prepared;

        let generator = SentenceGenerator::new(&references, &assembler, self.options.p_pronoun)?;
        let mut rng = match self.options.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };

        let outcome = generator.write_sentences(self.options.n_sentences, sink, &mut rng);
        let flushed = sink.flush();

        report.sentences_written = sink.lines_written();
        report.bytes_written = sink.bytes_written();
        report.duration_ms = start.elapsed().as_millis() as u64;

        if let Err(err) = outcome.and(flushed) {
            warn!(
                event = "generation_failed",
                run_id = %run_id,
                written = report.sentences_written,
                bytes = report.bytes_written,
                error = %err
            );
            return Err(err);
        }

        info!(
            event = "generation_finished",
            run_id = %run_id,
            written = report.sentences_written,
            bytes = report.bytes_written,
            duration_ms = report.duration_ms
        );

        Ok(report)
    }
}
