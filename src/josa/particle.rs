use crate::josa::hangul::Ending;

/// The closed set of particles that are corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Particle {
	/// 을 / 를
	Object,
	/// 이 / 가
	Subject,
	/// 은 / 는
	Topic,
	/// 과 / 와
	Conjunctive,
	/// 으로 / 로
	Directional,
}

/// A particle's two surface forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JosaParticlePair {
	/// Form used after a syllable with batchim.
	pub after_consonant: &'static str,
	/// Form used after a vowel (or anything that is not a Hangul syllable).
	pub after_vowel: &'static str,
}

impl Particle {
	pub const ALL: [Particle; 5] = [
		Particle::Object,
		Particle::Subject,
		Particle::Topic,
		Particle::Conjunctive,
		Particle::Directional,
	];

	pub fn pair(self) -> JosaParticlePair {
		let (after_consonant, after_vowel) = match self {
			Particle::Object => ("을", "를"),
			Particle::Subject => ("이", "가"),
			Particle::Topic => ("은", "는"),
			Particle::Conjunctive => ("과", "와"),
			Particle::Directional => ("으로", "로"),
		};
		JosaParticlePair {
			after_consonant,
			after_vowel,
		}
	}

	/// Look up the particle a surface form belongs to.
	pub fn from_form(form: &str) -> Option<Particle> {
		Particle::ALL.into_iter().find(|p| {
			let pair = p.pair();
			pair.after_consonant == form || pair.after_vowel == form
		})
	}

	/// The form that agrees with `ending`.
	pub fn form_for(self, ending: Ending) -> &'static str {
		let pair = self.pair();
		match ending {
			Ending::Consonant => pair.after_consonant,
			Ending::Vowel => pair.after_vowel,
		}
	}
}

/// Every surface form, longest first, so alternations try 으로 before 로.
pub fn all_forms() -> Vec<&'static str> {
	let mut forms: Vec<&'static str> = Particle::ALL
		.iter()
		.flat_map(|p| {
			let pair = p.pair();
			[pair.after_consonant, pair.after_vowel]
		})
		.collect();
	forms.sort_by_key(|f| std::cmp::Reverse(f.chars().count()));
	forms
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_form_covers_both_directions() {
		for particle in Particle::ALL {
			let pair = particle.pair();
			assert_eq!(Particle::from_form(pair.after_consonant), Some(particle));
			assert_eq!(Particle::from_form(pair.after_vowel), Some(particle));
		}
		assert_eq!(Particle::from_form("의"), None);
	}

	#[test]
	fn test_form_for_ending() {
		assert_eq!(Particle::Subject.form_for(Ending::Consonant), "이");
		assert_eq!(Particle::Subject.form_for(Ending::Vowel), "가");
		assert_eq!(Particle::Object.form_for(Ending::Vowel), "를");
		assert_eq!(Particle::Directional.form_for(Ending::Consonant), "으로");
	}

	#[test]
	fn test_all_forms_longest_first() {
		let forms = all_forms();
		assert_eq!(forms.len(), 10);
		assert_eq!(forms[0], "으로");
		assert!(forms.contains(&"로"));
	}
}
