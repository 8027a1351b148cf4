//! Reference descriptors for every alphabet character.
use super::params::ClassifierParams;
use crate::alphabet::Alphabet;
use crate::error::{Error, Result};
use crate::image::GrayImageU8;
use crate::pdc::{extract, Descriptor};
use crate::render::GlyphRenderer;
use log::debug;
use rayon::prelude::*;
use std::time::Instant;

/// Descriptors of one character, one per rendered font family.
#[derive(Clone, Debug)]
pub struct Template {
    pub character: char,
    pub descriptors: Vec<Descriptor>,
}

/// Templates in alphabet order. Immutable once built.
#[derive(Clone, Debug)]
pub struct TemplateLibrary {
    alphabet: Alphabet,
    params: ClassifierParams,
    templates: Vec<Template>,
}

impl TemplateLibrary {
    /// Render every character of `alphabet` in each configured font and
    /// extract its descriptor.
    ///
    /// Fails with [`Error::Construction`] as soon as any character cannot be
    /// rendered or renders without ink; a library never covers only part of
    /// its alphabet.
    pub fn build<R>(alphabet: Alphabet, renderer: &R, params: ClassifierParams) -> Result<Self>
    where
        R: GlyphRenderer + ?Sized,
    {
        params.validate()?;
        let t0 = Instant::now();
        let mut renderings = Vec::with_capacity(alphabet.len());
        for &character in alphabet.chars() {
            let mut per_font = Vec::with_capacity(params.fonts.len());
            for font in &params.fonts {
                let image = renderer
                    .render(character, font, params.font_size)
                    .map_err(|e| Error::Construction {
                        character,
                        reason: format!("rendering with font {font} failed: {e}"),
                    })?;
                per_font.push(image);
            }
            renderings.push(per_font);
        }
        debug!(
            "TemplateLibrary::build rendered {} chars x {} fonts in {:.3} ms",
            alphabet.len(),
            params.fonts.len(),
            t0.elapsed().as_secs_f64() * 1000.0
        );
        Self::from_images(alphabet, &renderings, params)
    }

    /// Build from reference images already rendered by the caller.
    ///
    /// `images[i]` holds the renderings of `alphabet.chars()[i]`, at least one.
    pub fn from_images(
        alphabet: Alphabet,
        images: &[Vec<GrayImageU8>],
        params: ClassifierParams,
    ) -> Result<Self> {
        params.pdc.validate()?;
        if images.len() != alphabet.len() {
            return Err(Error::Config(format!(
                "{} reference image sets supplied for an alphabet of {}",
                images.len(),
                alphabet.len()
            )));
        }
        let t0 = Instant::now();
        let templates = alphabet
            .chars()
            .par_iter()
            .zip(images.par_iter())
            .map(|(&character, renderings)| build_template(character, renderings, &params))
            .collect::<Result<Vec<_>>>()?;
        debug!(
            "TemplateLibrary::from_images built {} templates in {:.3} ms",
            templates.len(),
            t0.elapsed().as_secs_f64() * 1000.0
        );
        Ok(Self {
            alphabet,
            params,
            templates,
        })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn params(&self) -> &ClassifierParams {
        &self.params
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn template(&self, character: char) -> Option<&Template> {
        self.alphabet
            .position(character)
            .map(|i| &self.templates[i])
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn build_template(
    character: char,
    renderings: &[GrayImageU8],
    params: &ClassifierParams,
) -> Result<Template> {
    if renderings.is_empty() {
        return Err(Error::Construction {
            character,
            reason: "no reference rendering supplied".to_string(),
        });
    }
    let mut descriptors = Vec::with_capacity(renderings.len());
    for image in renderings {
        let descriptor =
            extract(&image.as_view(), &params.pdc, &params.binarize).map_err(|e| {
                Error::Construction {
                    character,
                    reason: e.to_string(),
                }
            })?;
        if descriptor.is_blank() {
            return Err(Error::Construction {
                character,
                reason: "reference rendering contains no ink".to_string(),
            });
        }
        debug!(
            "TemplateLibrary: {:?} rendering {} -> {} peripheral points",
            character,
            descriptors.len(),
            descriptor.present_count()
        );
        descriptors.push(descriptor);
    }
    Ok(Template {
        character,
        descriptors,
    })
}
