use super::{ConeStructure, ProblemDimensions, SolveSettings};
use crate::algebra::FloatT;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::io::Write;
use std::{fs::File, io, io::Read};

/// On-disk description of a generated instance: everything needed to
/// reproduce or archive a structure, but none of the problem data itself.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(bound = "T: Serialize + DeserializeOwned")]
pub struct InstanceDescription<T: FloatT> {
    /// seed the second-order cone sizes were drawn with
    pub seed: u64,
    pub dimensions: ProblemDimensions,
    pub cones: ConeStructure,
    pub settings: SolveSettings<T>,
}

impl<T> InstanceDescription<T>
where
    T: FloatT + DeserializeOwned + Serialize,
{
    /// Serialize the description to a file as JSON.
    pub fn write_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let json = serde_json::to_string(self)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }

    /// Read a description back from a JSON file.
    pub fn read_from_file(file: &mut File) -> Result<Self, io::Error> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let description = serde_json::from_str(&buffer)?;

        Ok(description)
    }
}

#[test]
fn test_json_io() {
    use crate::generator::{ConeStructure, SplitFractions};
    use rand::{rngs::StdRng, SeedableRng};
    use std::io::{Seek, SeekFrom};

    let split = SplitFractions::new(0.1, 0.3).unwrap();
    let dimensions = ProblemDimensions::new(100, &split).unwrap();

    let mut rng = StdRng::seed_from_u64(42);
    let cones = ConeStructure::from_dimensions(&dimensions, &mut rng);

    let description = InstanceDescription::<f64> {
        seed: 42,
        dimensions,
        cones,
        settings: SolveSettings::default(),
    };

    // write the description to a file
    let mut file = tempfile::tempfile().unwrap();
    description.write_to_file(&mut file).unwrap();

    // read it back and compare
    file.seek(SeekFrom::Start(0)).unwrap();
    let description2 = InstanceDescription::<f64>::read_from_file(&mut file).unwrap();
    assert_eq!(description, description2);
}
