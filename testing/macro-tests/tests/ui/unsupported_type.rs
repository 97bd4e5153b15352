use metafold::Marshal;

#[derive(Default, Marshal)]
pub struct Loose {
    pub any: metafold::Value,
}

fn main() {}
