//! Mars.

use super::{Series, Term};

const L0: [Term; 184] = [
    (6.20347711583, 0.0, 0.0),
    (0.186563681, 5.05037100303, 3340.6124266998),
    (0.01108216792, 5.40099836958, 6681.2248533996),
    (0.00091798394, 5.75478745111, 10021.8372800994),
    (0.00027744987, 5.97049512942, 3.523118349),
    (0.0001061023, 2.93958524973, 2281.2304965106),
    (0.00012315897, 0.84956081238, 2810.9214616052),
    (0.00008926772, 4.15697845939, 0.0172536522),
    (0.00008715688, 6.11005159792, 13362.4497067992),
    (0.00006797552, 0.36462243626, 398.1490034082),
    (0.00007774867, 3.33968655074, 5621.8429232104),
    (0.00003575079, 1.66186540141, 2544.3144198834),
    (0.00004161101, 0.2281497533, 2942.4634232916),
    (0.0000307525, 0.85696597082, 191.4482661116),
    (0.00002628122, 0.6480614357, 3337.0893083508),
    (0.00002937543, 6.07893711408, 0.0673103028),
    (0.0000238942, 5.03896401349, 796.2980068164),
    (0.00002579842, 0.02996706197, 3344.1355450488),
    (0.0000152814, 1.14979306228, 6151.533888305),
    (0.00001798808, 0.65634026844, 529.6909650946),
    (0.00001264356, 3.62275092231, 5092.1519581158),
    (0.00001286232, 3.06795924626, 2146.1654164752),
    (0.00001546408, 2.91579633392, 1751.539531416),
    (0.00001024907, 3.69334293555, 8962.4553499102),
    (0.00000891567, 0.1829389909, 16703.062133499),
    (0.0000085876, 2.40093704204, 2914.0142358238),
    (0.00000832718, 2.46418591282, 3340.5951730476),
    (0.00000832724, 4.49495753458, 3340.629680352),
    (0.00000712899, 3.66336014788, 1059.3819301892),
    (0.00000748724, 3.82248399468, 155.4203994342),
    (0.00000723863, 0.67497565801, 3738.761430108),
    (0.00000635557, 2.92182704275, 8432.7643848156),
    (0.00000655163, 0.48864075176, 3127.3133312618),
    (0.00000550472, 3.81001205408, 0.9803210682),
    (0.00000552746, 4.47478863016, 1748.016413067),
    (0.00000425972, 0.55365138172, 6283.0758499914),
    (0.00000415132, 0.49662314774, 213.299095438),
    (0.00000472164, 3.6254781941, 1194.4470102246),
    (0.00000306552, 0.38052862973, 6684.7479717486),
    (0.00000312141, 0.99853322843, 6677.7017350506),
    (0.00000293199, 4.22131277914, 20.7753954924),
    (0.00000302377, 4.48618150321, 3532.0606928114),
    (0.00000274028, 0.54222141841, 3340.545116397),
    (0.00000281073, 5.88163372945, 1349.8674096588),
    (0.00000231185, 1.28240685294, 3870.3033917944),
    (0.000002836, 5.76885494123, 3149.1641605882),
    (0.00000236114, 5.75504515576, 3333.498879699),
    (0.00000274035, 0.13372501211, 3340.6797370026),
    (0.00000299396, 2.78323705697, 6254.6266625236),
    (0.00000204161, 2.82133266185, 1221.8485663214),
    (0.00000238857, 5.37155471672, 4136.9104335162),
    (0.00000188639, 1.49103016486, 9492.1463150048),
    (0.00000221225, 3.50466672203, 382.8965322232),
    (0.00000179196, 1.00561112574, 951.7184062506),
    (0.0000017211, 0.43943041719, 5486.777843175),
    (0.00000193126, 3.35715137745, 3.5904286518),
    (0.00000144305, 1.41874193418, 135.0650800354),
    (0.00000160011, 3.94854735192, 4562.4609930212),
    (0.00000174068, 2.41360332576, 553.5694028424),
    (0.00000130993, 4.04491720264, 12303.06777661),
    (0.00000138245, 4.30145176915, 7.1135470008),
    (0.00000128062, 1.80665643332, 5088.6288397668),
    (0.00000139897, 3.32592516164, 2700.7151403858),
    (0.00000128102, 2.20806651008, 1592.5960136328),
    (0.00000116945, 3.12805282207, 7903.073419721),
    (0.00000110375, 1.05195079687, 242.728603974),
    (0.00000113486, 3.70070798123, 1589.0728952838),
    (0.0000010009, 3.24343740861, 11773.3768115154),
    (0.00000095592, 0.53954181149, 20043.6745601988),
    (0.00000098947, 4.8455829474, 6681.2421070518),
    (0.00000104541, 0.78535382076, 8827.3902698748),
    (0.00000084187, 3.9897072073, 4399.994356889),
    (0.00000086931, 2.20186740523, 11243.6858464208),
    (0.00000071437, 2.80307550016, 3185.1920272656),
    (0.00000072091, 5.84672102525, 5884.9268465832),
    (0.00000073476, 2.18428012567, 8429.2412664666),
    (0.00000098946, 2.81481140371, 6681.2075997474),
    (0.00000068414, 2.73834914412, 2288.3440435114),
    (0.00000086751, 1.02092221563, 7079.3738568078),
    (0.0000006532, 2.68118597578, 28.4491874678),
    (0.00000083749, 3.2025613099, 4690.4798363586),
    (0.00000075034, 0.76643418252, 6467.9257579616),
    (0.00000068984, 3.76399731788, 6041.3275670856),
    (0.00000066706, 0.73630620766, 3723.508958923),
    (0.00000063314, 4.5277147047, 426.598190876),
    (0.00000061683, 6.16831509419, 2274.1169495098),
    (0.00000052256, 0.89941531307, 9623.6882766912),
    (0.00000055488, 4.6062546702, 4292.3308329504),
    (0.00000051332, 4.14823636534, 3341.592747768),
    (0.00000056629, 5.06250410206, 15.252471185),
    (0.00000063376, 0.91296240798, 3553.9115221378),
    (0.00000045829, 0.78784235062, 1990.745017041),
    (0.00000048542, 3.95670418719, 4535.0594369244),
    (0.00000041223, 6.02019329922, 3894.1818295422),
    (0.00000041939, 3.58326425115, 8031.0922630584),
    (0.00000056396, 1.68727150304, 6872.6731195112),
    (0.00000055909, 3.46260833495, 263.0839233728),
    (0.00000051678, 2.81307492682, 3339.6321056316),
    (0.00000040671, 3.13832621829, 9595.2390892234),
    (0.00000038107, 0.7340194632, 10025.3603984484),
    (0.00000039495, 5.6322539216, 3097.88382272579),
    (0.00000044174, 3.19529736702, 5628.9564702112),
    (0.00000036716, 2.63720775102, 692.1576012268),
    (0.00000045905, 0.28718981497, 5614.7293762096),
    (0.00000038352, 5.82880707426, 3191.0492295652),
    (0.00000038206, 2.34835984063, 162.4666361322),
    (0.00000032562, 0.48400659333, 6681.2921637024),
    (0.00000037135, 0.68508150774, 2818.035008606),
    (0.00000031168, 3.98160912982, 20.3553193988),
    (0.00000032561, 0.89250316888, 6681.1575430968),
    (0.00000037752, 4.15482955299, 2803.8079146044),
    (0.00000033626, 6.11992401052, 6489.776587288),
    (0.00000029007, 2.42707385674, 3319.8370312074),
    (0.0000003879, 1.35198498795, 10018.3141617504),
    (0.00000033148, 1.14023770004, 5.5229243074),
    (0.00000027584, 1.59691203058, 7210.9158184942),
    (0.00000028686, 5.72055456734, 7477.522860216),
    (0.00000034031, 2.59544082509, 11769.8536931664),
    (0.0000002538, 0.52093116112, 10.6366653498),
    (0.00000026357, 1.34532646574, 3496.032826134),
    (0.00000024554, 4.00323183088, 11371.7046897582),
    (0.00000025637, 0.2496352342, 522.5774180938),
    (0.00000027278, 4.55645328122, 3361.3878221922),
    (0.00000023764, 1.84058377256, 12832.7587417046),
    (0.00000022816, 3.52628212106, 1648.4467571974),
    (0.00000022274, 0.72106133721, 266.6070417218),
    (0.00000021202, 3.11824472284, 2957.7158944766),
    (0.00000020158, 3.67131504946, 1758.6530784168),
    (0.0000002153, 6.15388757177, 3264.3463554242),
    (0.00000020093, 1.08247416065, 7064.1213856228),
    (0.00000021343, 4.28218757863, 4032.7700279266),
    (0.0000002754, 6.08389942337, 6674.1113063988),
    (0.00000019849, 2.37668920745, 10713.9948813262),
    (0.00000025512, 3.43242352804, 3443.7052009184),
    (0.00000022542, 5.64861703438, 2388.8940204492),
    (0.00000024378, 0.96994696413, 632.7837393132),
    (0.00000023079, 4.74990214223, 3347.7259737006),
    (0.00000017709, 3.69742343974, 3344.2028553516),
    (0.00000022662, 3.95446324417, 4989.0591838972),
    (0.00000022604, 5.24082917494, 3205.5473466644),
    (0.00000016811, 5.48619684111, 3.881335358),
    (0.00000018422, 4.22535881468, 2787.0430238574),
    (0.00000022737, 4.98520896596, 7632.9432596502),
    (0.00000016648, 2.52823633184, 14584.2982731206),
    (0.00000020963, 4.27878216453, 5099.2655051166),
    (0.00000016042, 1.76786752521, 3475.6775067352),
    (0.00000015816, 3.13240869691, 59.3738619136),
    (0.00000018113, 3.25756020453, 3337.021998048),
    (0.00000019295, 3.23911854642, 7.046236698),
    (0.00000016772, 4.3973150711, 15643.6802033098),
    (0.00000017555, 4.09197396097, 74.7815985673),
    (0.00000013704, 2.5411701816, 4933.2084403326),
    (0.00000016011, 1.54669633224, 14054.607308026),
    (0.00000013547, 4.04152185347, 4929.6853219836),
    (0.00000014566, 3.45210993051, 7373.3824546264),
    (0.00000013926, 5.40797129468, 10973.55568635),
    (0.00000014246, 0.59808746067, 23.8784377478),
    (0.00000014023, 1.44218648988, 10404.7338123226),
    (0.00000016051, 3.79409950488, 2118.7638603784),
    (0.00000013714, 3.59050634457, 15113.9892382152),
    (0.00000018038, 4.25391532, 2487.4160449478),
    (0.00000015846, 0.56901288692, 103.0927742186),
    (0.00000013403, 5.16920432994, 10213.285546211),
    (0.00000016069, 2.36895958451, 3265.8308281325),
    (0.00000012773, 0.10483085657, 7234.794256242),
    (0.00000012199, 1.73079687044, 36.0278666774),
    (0.00000012283, 5.19940030635, 10021.8545337516),
    (0.00000011945, 5.47997890162, 2921.1277828246),
    (0.0000001189, 4.76593905835, 5828.0284716476),
    (0.00000012283, 3.16862882612, 10021.8200264472),
    (0.00000013274, 6.1780690534, 1744.4259844152),
    (0.00000011777, 5.727315509, 0.42007609361),
    (0.0000001234, 2.52146766331, 2906.900688823),
    (0.00000014458, 4.38010658432, 316.3918696566),
    (0.00000010639, 3.45016942919, 639.897286314),
    (0.00000010925, 0.60397688999, 5085.038411115),
    (0.00000010645, 5.47696728127, 419.4846438752),
    (0.00000010797, 1.37191539718, 10419.9862835076),
    (0.00000010565, 1.09061610786, 12168.0026965746),
    (0.00000012733, 1.79883375851, 13745.3462390224),
    (0.00000012156, 4.42295240981, 14712.317116458),
    (0.00000010685, 4.33894776374, 7740.6067835888),
    (0.00000010041, 1.3829466683, 3583.3410306738),
    (0.00000010585, 0.89641284928, 23384.2869868986),
];

const L1: [Term; 36] = [
    (3340.85627474342, 0.0, 0.0),
    (0.01458227051, 3.60426053609, 3340.6124266998),
    (0.00164901343, 3.92631250962, 6681.2248533996),
    (0.00019963338, 4.2659406103, 10021.8372800994),
    (0.00003452399, 4.73210386365, 3.523118349),
    (0.0000248548, 4.61277567318, 13362.4497067992),
    (0.00000841551, 4.45858256765, 2281.2304965106),
    (0.00000537566, 5.01589727492, 398.1490034082),
    (0.00000521041, 4.99422678175, 3344.1355450488),
    (0.00000432614, 2.5606640286, 191.4482661116),
    (0.00000429656, 5.31646162367, 155.4203994342),
    (0.00000381747, 3.53881289437, 796.2980068164),
    (0.00000314129, 4.96335266049, 16703.062133499),
    (0.00000282804, 3.15967518204, 2544.3144198834),
    (0.00000205664, 4.5689145566, 2146.1654164752),
    (0.00000168805, 1.32894813366, 3337.0893083508),
    (0.00000157587, 4.18501035954, 1751.539531416),
    (0.00000133686, 2.23325104196, 0.9803210682),
    (0.00000116561, 2.21347652545, 1059.3819301892),
    (0.00000117591, 6.02407213861, 6151.533888305),
    (0.00000113595, 5.42803224317, 3738.761430108),
    (0.00000133563, 5.97421903927, 1748.016413067),
    (0.00000091098, 1.09627836591, 1349.8674096588),
    (0.00000083301, 5.29636626272, 6684.7479717486),
    (0.00000113876, 2.12869455089, 1194.4470102246),
    (0.00000080776, 4.42813405865, 529.6909650946),
    (0.00000079531, 2.2486426633, 8962.4553499102),
    (0.00000072505, 5.8420816324, 242.728603974),
    (0.00000072946, 2.50189460554, 951.7184062506),
    (0.00000071487, 3.85636094435, 2914.0142358238),
    (0.00000085342, 3.90854841008, 553.5694028424),
    (0.00000067582, 5.02327686473, 382.8965322232),
    (0.00000065089, 1.01802439311, 3340.5951730476),
    (0.00000065089, 3.04879603978, 3340.629680352),
    (0.00000061508, 4.151831598, 3149.1641605882),
    (0.0000005652, 3.8881369932, 4136.9104335162),
];

const L2: [Term; 5] = [
    (0.00058015791, 2.04979463279, 3340.6124266998),
    (0.00054187645, 0.0, 0.0),
    (0.00013908426, 2.45742359888, 6681.2248533996),
    (0.00002465104, 2.80000020929, 10021.8372800994),
    (0.00000398379, 3.14118428289, 13362.4497067992),
];

const L3: [Term; 1] = [
    (0.00001482423, 0.44434694876, 3340.6124266998),
];

const B0: [Term; 57] = [
    (0.03197134986, 3.76832042432, 3340.6124266998),
    (0.00298033234, 4.10616996243, 6681.2248533996),
    (0.00289104742, 0.0, 0.0),
    (0.00031365538, 4.44651052853, 10021.8372800994),
    (0.000034841, 4.78812547889, 13362.4497067992),
    (0.00000442999, 5.65233015876, 3337.0893083508),
    (0.00000443401, 5.02642620491, 3344.1355450488),
    (0.00000399109, 5.130568147, 16703.062133499),
    (0.00000292506, 3.79290644595, 2281.2304965106),
    (0.00000181982, 6.13648011704, 6151.533888305),
    (0.00000163159, 4.26399626634, 529.6909650946),
    (0.00000159678, 2.23194610246, 1059.3819301892),
    (0.00000139323, 2.41796344238, 8962.4553499102),
    (0.00000149297, 2.16501209917, 5621.8429232104),
    (0.00000142686, 1.1821501611, 3340.5951730476),
    (0.00000142685, 3.2129218082, 3340.629680352),
    (0.00000082544, 5.36667872319, 6684.7479717486),
    (0.0000007364, 5.09187524843, 398.1490034082),
    (0.0000007266, 5.53775710437, 6283.0758499914),
    (0.00000086377, 5.74429648412, 3738.761430108),
    (0.00000083276, 5.98866315739, 6677.7017350506),
    (0.00000060116, 3.67960808826, 796.2980068164),
    (0.00000063111, 0.73049113369, 5884.9268465832),
    (0.00000062338, 4.85071999184, 2942.4634232916),
    (0.00000046951, 5.54339723804, 3340.545116397),
    (0.00000046953, 5.13486627234, 3340.6797370026),
    (0.0000004663, 5.47361665459, 20043.6745601988),
    (0.00000045588, 2.13262507507, 2810.9214616052),
    (0.00000041269, 0.20003189001, 9492.1463150048),
    (0.00000047199, 4.52184736343, 3149.1641605882),
    (0.0000003854, 4.08008443274, 4136.9104335162),
    (0.00000033069, 4.06581918329, 1751.539531416),
    (0.00000029694, 5.92218297386, 3532.0606928114),
    (0.00000032736, 2.62071056958, 2914.0142358238),
    (0.00000029521, 2.75342566734, 12303.06777661),
    (0.00000028169, 2.06282533993, 5486.777843175),
    (0.00000028618, 4.94710527914, 3870.3033917944),
    (0.00000026603, 3.5508584402, 6681.2421070518),
    (0.00000026603, 1.52008675291, 6681.2075997474),
    (0.00000023336, 2.27624532707, 1589.0728952838),
    (0.00000026052, 2.60064548916, 4399.994356889),
    (0.00000022637, 2.27507466406, 1194.4470102246),
    (0.00000018887, 6.04416196149, 7079.3738568078),
    (0.00000014846, 3.41358603159, 5088.6288397668),
    (0.00000019947, 2.67365368471, 8432.7643848156),
    (0.00000014682, 5.89211938785, 9623.6882766912),
    (0.00000014152, 2.42512744356, 3333.498879699),
    (0.0000001331, 2.62839773036, 426.598190876),
    (0.00000014008, 1.67425558329, 6254.6266625236),
    (0.00000015104, 2.81013535571, 3496.032826134),
    (0.00000013011, 5.70759434129, 10025.3603984484),
    (0.0000001208, 1.51804981987, 3185.1920272656),
    (0.00000013183, 0.04521207632, 10018.3141617504),
    (0.00000011554, 5.5741897182, 191.4482661116),
    (0.00000011196, 0.55829576311, 5092.1519581158),
    (0.0000001153, 2.13314819584, 11773.3768115154),
    (0.00000010435, 5.72414012635, 6467.9257579616),
];

const B1: [Term; 6] = [
    (0.00350068845, 5.36847836211, 3340.6124266998),
    (0.00009670755, 5.47877786506, 6681.2248533996),
    (0.00001471918, 3.20205766795, 10021.8372800994),
    (0.00000425864, 3.40843812875, 13362.4497067992),
    (0.00000102039, 0.77617286189, 3337.0893083508),
    (0.00000078848, 3.71768293865, 16703.062133499),
];

const B2: [Term; 2] = [
    (0.0001672669, 0.60221392419, 3340.6124266998),
    (0.00000302141, 5.55871276021, 6681.2248533996),
];

const R0: [Term; 128] = [
    (1.53033488276, 0.0, 0.0),
    (0.14184953153, 3.47971283519, 3340.6124266998),
    (0.00660776357, 3.81783442097, 6681.2248533996),
    (0.00046179117, 4.15595316284, 10021.8372800994),
    (0.00008109738, 5.55958460165, 2810.9214616052),
    (0.00007485315, 1.77238998069, 5621.8429232104),
    (0.00005523193, 1.3643631888, 2281.2304965106),
    (0.0000382516, 4.49407182408, 13362.4497067992),
    (0.00002306539, 0.09081742493, 2544.3144198834),
    (0.00001999399, 5.36059605227, 3337.0893083508),
    (0.00002484385, 4.92545577893, 2942.4634232916),
    (0.00001960198, 4.74249386323, 3344.1355450488),
    (0.00001167115, 2.11261501155, 5092.1519581158),
    (0.00001102828, 5.0090826416, 398.1490034082),
    (0.00000899077, 4.40790433994, 529.6909650946),
    (0.00000992252, 5.83862401067, 6151.533888305),
    (0.00000807348, 2.10216647104, 1059.3819301892),
    (0.0000079791, 3.44839026172, 796.2980068164),
    (0.0000074098, 1.49906336892, 2146.1654164752),
    (0.0000069234, 2.13378814785, 8962.4553499102),
    (0.00000633144, 0.89353285018, 3340.5951730476),
    (0.00000725583, 1.24516913473, 8432.7643848156),
    (0.0000063314, 2.92430448169, 3340.629680352),
    (0.00000574352, 0.82896196337, 2914.0142358238),
    (0.00000526187, 5.38292276228, 3738.761430108),
    (0.00000629976, 1.28738135858, 1751.539531416),
    (0.00000472776, 5.19850457873, 3127.3133312618),
    (0.00000348095, 4.83219198908, 16703.062133499),
    (0.00000283702, 2.90692294913, 3532.0606928114),
    (0.00000279552, 5.25749247548, 6283.0758499914),
    (0.00000233827, 5.10546492529, 5486.777843175),
    (0.00000219428, 5.58340248784, 191.4482661116),
    (0.00000269891, 3.76394728622, 5884.9268465832),
    (0.00000208333, 5.25476080773, 3340.545116397),
    (0.00000275224, 2.90818883832, 1748.016413067),
    (0.00000275501, 1.21767967781, 6254.6266625236),
    (0.00000239133, 2.03669896238, 1194.4470102246),
    (0.0000022319, 4.19861593779, 3149.1641605882),
    (0.00000182686, 5.08062683355, 6684.7479717486),
    (0.00000186213, 5.69871555748, 6677.7017350506),
    (0.00000175995, 5.95341786369, 3870.3033917944),
    (0.00000178613, 4.18423025538, 3333.498879699),
    (0.00000208336, 4.84626442122, 3340.6797370026),
    (0.00000228128, 3.2552902062, 6872.6731195112),
    (0.00000144286, 0.21296012258, 5088.6288397668),
    (0.00000163534, 3.79889068111, 4136.9104335162),
    (0.0000013312, 1.5391010671, 7903.073419721),
    (0.00000141759, 2.47790321309, 4562.4609930212),
    (0.00000114941, 4.31745088059, 1349.8674096588),
    (0.00000118781, 2.12178071222, 1589.0728952838),
    (0.00000102096, 6.18138550087, 9492.1463150048),
    (0.00000128555, 5.49883294915, 8827.3902698748),
    (0.00000111538, 0.55339169625, 11243.6858464208),
    (0.00000082498, 1.6222704459, 11773.3768115154),
    (0.00000083212, 0.61553380568, 8429.2412664666),
    (0.0000008447, 0.6227459311, 1592.5960136328),
    (0.00000086659, 1.74988330093, 2700.7151403858),
    (0.00000071826, 2.47489899385, 12303.06777661),
    (0.00000085312, 1.61621097912, 4690.4798363586),
    (0.00000063641, 2.67334126661, 426.598190876),
    (0.00000068599, 2.40197828418, 4399.994356889),
    (0.00000058559, 4.72052787516, 213.299095438),
    (0.00000062015, 1.10065866221, 1221.8485663214),
    (0.00000066509, 2.21307705185, 6041.3275670856),
    (0.00000055811, 1.23288325946, 3185.1920272656),
    (0.00000054989, 5.72691385306, 951.7184062506),
    (0.00000052418, 3.02366828926, 4292.3308329504),
    (0.00000055686, 5.44686699242, 3723.508958923),
    (0.00000058959, 3.26242666052, 6681.2421070518),
    (0.00000044629, 2.0147364039, 8031.0922630584),
    (0.00000058959, 1.23165502899, 6681.2075997474),
    (0.00000042444, 2.26551590902, 155.4203994342),
    (0.00000038956, 2.57760416009, 3341.592747768),
    (0.00000051561, 5.72326937712, 7079.3738568078),
    (0.00000048939, 5.61614696751, 3553.9115221378),
    (0.00000045414, 5.43290921705, 6467.9257579616),
    (0.00000036435, 4.43921812388, 3894.1818295422),
    (0.0000003598, 1.15966567007, 2288.3440435114),
    (0.00000035265, 5.49029710802, 1990.745017041),
    (0.00000042191, 1.6325374276, 5628.9564702112),
    (0.00000044292, 5.0034136685, 5614.7293762096),
    (0.00000033623, 5.17029029766, 20043.6745601988),
    (0.00000043256, 1.03732072925, 11769.8536931664),
    (0.00000039237, 1.24237122859, 3339.6321056316),
    (0.00000031943, 4.59258406791, 2274.1169495098),
    (0.00000030345, 2.4417767013, 11371.7046897582),
    (0.00000032259, 2.38215172582, 4535.0594369244),
    (0.0000003187, 4.37521442752, 3.523118349),
    (0.0000002935, 4.06034813442, 3097.88382272579),
    (0.00000031972, 1.93970478412, 382.8965322232),
    (0.00000026166, 5.58466944895, 9623.6882766912),
    (0.00000027904, 4.25805969214, 3191.0492295652),
    (0.00000033065, 0.85467740581, 553.5694028424),
    (0.00000027543, 1.57668567401, 9595.2390892234),
    (0.00000025159, 0.81355213242, 10713.9948813262),
    (0.0000002207, 0.85747723964, 3319.8370312074),
    (0.00000024772, 5.38970742761, 2818.035008606),
    (0.00000023359, 6.01453778225, 3496.032826134),
    (0.00000024732, 2.58034797703, 2803.8079146044),
    (0.00000019365, 5.18528750472, 6681.2921637024),
    (0.00000019122, 5.41968559451, 10025.3603984484),
    (0.00000019364, 5.59378382138, 6681.1575430968),
    (0.0000001833, 5.7956732424, 7064.1213856228),
    (0.00000018193, 5.61307426173, 7.1135470008),
    (0.00000020392, 4.53637816869, 6489.776587288),
    (0.0000002126, 6.19160142215, 14054.607308026),
    (0.00000017094, 1.55004739305, 2957.7158944766),
    (0.00000022791, 3.41709388606, 7632.9432596502),
    (0.00000020585, 2.98697279083, 3361.3878221922),
    (0.00000018005, 2.81431094394, 4032.7700279266),
    (0.00000017049, 6.15528099726, 10404.7338123226),
    (0.00000016488, 3.84534700818, 10973.55568635),
    (0.00000016052, 0.92823508003, 14584.2982731206),
    (0.00000021027, 2.38474290907, 4989.0591838972),
    (0.00000016267, 1.92321585819, 7373.3824546264),
    (0.00000016291, 6.28233085307, 7210.9158184942),
    (0.00000018585, 4.07325116588, 2388.8940204492),
    (0.00000015977, 4.58368417141, 3264.3463554242),
    (0.00000019913, 2.7351844595, 5099.2655051166),
    (0.00000019661, 1.86285979, 3443.7052009184),
    (0.000000165, 4.14061745086, 7477.522860216),
    (0.00000019495, 6.03778234182, 10018.3141617504),
    (0.00000019099, 0.22623441108, 13745.3462390224),
    (0.00000017163, 3.18825562972, 3347.7259737006),
    (0.0000001541, 2.2077350796, 2118.7638603784),
    (0.00000017238, 3.67067776368, 3205.5473466644),
    (0.00000016451, 2.86641622696, 14712.317116458),
    (0.00000016659, 4.52130808861, 6674.1113063988),
];

const R1: [Term; 15] = [
    (0.0110743334, 2.0325052495, 3340.6124266998),
    (0.00103175886, 2.37071845682, 6681.2248533996),
    (0.000128772, 0.0, 0.0),
    (0.0001081588, 2.70888093803, 10021.8372800994),
    (0.0000119455, 3.04702182503, 13362.4497067992),
    (0.00000438579, 2.88835072628, 2281.2304965106),
    (0.00000395698, 3.42324611291, 3344.1355450488),
    (0.00000182572, 1.58428644001, 2544.3144198834),
    (0.0000013585, 3.38507017993, 16703.062133499),
    (0.00000128204, 0.6299122057, 1059.3819301892),
    (0.00000127068, 1.9538977574, 796.2980068164),
    (0.00000118443, 2.99761345074, 2146.1654164752),
    (0.00000128362, 6.04343360441, 3337.0893083508),
    (0.00000087537, 3.42052758979, 398.1490034082),
    (0.00000083026, 3.85574986653, 3738.761430108),
];

const R2: [Term; 3] = [
    (0.00044242247, 0.47930603943, 3340.6124266998),
    (0.00008138042, 0.86998398093, 6681.2248533996),
    (0.00001274915, 1.22594050809, 10021.8372800994),
];

pub(crate) const MARS: Series = Series {
    longitude: &[&L0, &L1, &L2, &L3],
    latitude: &[&B0, &B1, &B2],
    radius: &[&R0, &R1, &R2],
};
