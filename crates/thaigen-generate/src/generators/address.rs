use rand::Rng;

use thaigen_core::{AddressNaming, ThaiAddress};

use crate::errors::GenerationError;
use crate::generators::house::random_house_number;
use crate::generators::pick_reference;
use crate::reference::AddressReferenceSet;

/// Draw every address component independently and uniformly.
pub fn random_address<'a>(
    references: &'a AddressReferenceSet,
    rng: &mut dyn rand::RngCore,
) -> Result<ThaiAddress<'a>, GenerationError> {
    let naming = if rng.random_bool(0.5) {
        AddressNaming::Rural
    } else {
        AddressNaming::Urban
    };
    let house = random_house_number(rng);
    let amphoe = pick_reference(&references.amphoes, "amphoe", rng)?;
    let district = pick_reference(&references.districts, "district", rng)?;
    let province = pick_reference(&references.provinces, "province", rng)?;
    let zipcode = pick_reference(&references.zipcodes, "zipcode", rng)?;

    Ok(ThaiAddress {
        house,
        naming,
        amphoe,
        district,
        province,
        zipcode,
    })
}
